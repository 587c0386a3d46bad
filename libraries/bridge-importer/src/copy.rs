//! File copying into the destination tree

use crate::{ImportError, Result};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Create `path` and its parents if missing
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
        debug!("Created directory {}", path.display());
    }
    Ok(())
}

/// Destination of `source` inside `dest_folder`, keeping the base name
pub fn destination_path(source: &Path, dest_folder: &Path) -> Result<PathBuf> {
    let file_name = source.file_name().ok_or_else(|| {
        ImportError::InvalidPath(format!("{} has no file name", source.display()))
    })?;
    Ok(dest_folder.join(file_name))
}

/// Folder name for a manifest type, or `None` if nothing usable is left
///
/// Path separators and characters invalid on common filesystems become `_`,
/// so the result is always a single path component.
pub fn sanitize_folder_name(s: &str) -> Option<String> {
    let clean = s
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string();

    match clean.as_str() {
        "" | "." | ".." => None,
        _ => Some(clean),
    }
}

/// Whether `source` and `dest` name the same existing file
pub fn is_same_file(source: &Path, dest: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(dest)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copy `source` to `dest` byte-for-byte
///
/// When `overwrite` is false an existing `dest` is an `AlreadyExists` error and
/// is left untouched. Copying a file onto itself is an `InvalidInput` error.
/// A copy that fails midway removes the file it created.
pub fn copy_file(source: &Path, dest: &Path, overwrite: bool) -> io::Result<u64> {
    if overwrite {
        // fs::copy truncates dest before reading source
        if is_same_file(source, dest) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is both source and destination", source.display()),
            ));
        }
        return fs::copy(source, dest);
    }

    let mut reader = File::open(source)?;
    let mut writer = OpenOptions::new().write(true).create_new(true).open(dest)?;

    match io::copy(&mut reader, &mut writer) {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            drop(writer);
            let _ = fs::remove_file(dest);
            Err(e)
        }
    }
}
