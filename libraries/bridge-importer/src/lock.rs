//! Destination lock
//!
//! Two syncs writing into the same destination tree would race on the same
//! files. A run holds `<root>.lock`, created atomically next to the root, for
//! its whole duration. The file records the holder's run id and pid; a lock
//! whose holder process is gone is reclaimed by the next run.

use crate::{copy, ImportError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use sysinfo::{Pid, System};
use tracing::{debug, warn};
use uuid::Uuid;

const LOCK_SUFFIX: &str = "lock";

/// Age after which a lock file with unreadable contents counts as abandoned
const UNREADABLE_LOCK_GRACE: Duration = Duration::from_secs(60);

/// Holder recorded in a lock file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockHolder {
    pub run_id: String,
    pub pid: u32,
}

impl LockHolder {
    /// Parse the `<run_id> <pid>` line written by [`DestinationLock::acquire`]
    pub fn parse(contents: &str) -> Option<Self> {
        let mut parts = contents.split_whitespace();
        let run_id = parts.next()?.to_string();
        let pid = parts.next()?.parse().ok()?;
        Some(Self { run_id, pid })
    }
}

/// Exclusive claim on a destination root, released on drop
#[derive(Debug)]
pub struct DestinationLock {
    path: PathBuf,
    run_id: String,
}

impl DestinationLock {
    /// Lock file location for `root`
    pub fn lock_path(root: &Path) -> PathBuf {
        match root.file_name() {
            Some(name) => {
                let mut lock_name = name.to_os_string();
                lock_name.push(".");
                lock_name.push(LOCK_SUFFIX);
                root.with_file_name(lock_name)
            }
            None => root.join(format!(".asset-bridge.{}", LOCK_SUFFIX)),
        }
    }

    /// Claim `root`, failing if a live run holds it
    ///
    /// A lock left behind by a process that no longer exists is removed and
    /// claimed.
    pub fn acquire(root: &Path) -> Result<Self> {
        let path = Self::lock_path(root);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            copy::ensure_dir(parent)?;
        }

        let mut file = match Self::create(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                if !Self::is_stale(&path) {
                    return Err(ImportError::AlreadySyncing(path));
                }
                warn!("Reclaiming abandoned lock {}", path.display());
                match fs::remove_file(&path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(e.into()),
                }
                // Another run may reclaim at the same moment; only one create wins
                match Self::create(&path) {
                    Ok(file) => file,
                    Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                        return Err(ImportError::AlreadySyncing(path));
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Err(e) => return Err(e.into()),
        };

        let run_id = Uuid::new_v4().to_string();
        writeln!(file, "{} {}", run_id, std::process::id())?;
        debug!("Acquired destination lock {}", path.display());

        Ok(Self { path, run_id })
    }

    /// Holder recorded in the lock file for `root`, if any
    pub fn holder(root: &Path) -> Option<LockHolder> {
        let contents = fs::read_to_string(Self::lock_path(root)).ok()?;
        LockHolder::parse(&contents)
    }

    fn create(path: &Path) -> std::io::Result<fs::File> {
        OpenOptions::new().write(true).create_new(true).open(path)
    }

    fn is_stale(path: &Path) -> bool {
        let Ok(contents) = fs::read_to_string(path) else {
            return false;
        };

        match LockHolder::parse(&contents) {
            Some(holder) => !process_alive(holder.pid),
            // Holder may still be writing its line
            None => fs::metadata(path)
                .and_then(|m| m.modified())
                .ok()
                .and_then(|modified| modified.elapsed().ok())
                .is_some_and(|age| age > UNREADABLE_LOCK_GRACE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}

impl Drop for DestinationLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!("Failed to release lock {}: {}", self.path.display(), e);
        }
    }
}

fn process_alive(pid: u32) -> bool {
    let pid = Pid::from_u32(pid);
    let mut system = System::new();
    system.refresh_process(pid) && system.process(pid).is_some()
}
