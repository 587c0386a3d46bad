//! Destination removal

use crate::Result;
use bridge_core::AssetHost;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Result of cleaning a destination root
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub root: PathBuf,
    pub removed: bool,
    pub files_removed: usize,
}

/// Delete the destination tree and its host metadata, then refresh the host
pub fn clean_destination<H: AssetHost + ?Sized>(root: &Path, host: &mut H) -> Result<CleanReport> {
    let mut report = CleanReport {
        root: root.to_path_buf(),
        removed: false,
        files_removed: 0,
    };

    if root.exists() {
        report.files_removed = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .count();

        fs::remove_dir_all(root)?;
        host.remove_metadata(root)?;
        report.removed = true;

        info!(
            "Cleaned imported assets: removed {} ({} files)",
            root.display(),
            report.files_removed
        );
    } else {
        debug!("Nothing to clean at {}", root.display());
    }

    host.refresh_index()?;

    Ok(report)
}
