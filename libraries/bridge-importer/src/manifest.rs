//! Export report loading

use crate::LoadError;
use bridge_core::ImportReport;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name the exporter writes into its export directory
pub const REPORT_FILE_NAME: &str = "export_report.json";

/// Load the export report at `report_path`
///
/// A report without an `assets` array is valid and empty.
pub fn load(report_path: &Path) -> Result<ImportReport, LoadError> {
    if !report_path.exists() {
        return Err(LoadError::NotFound(report_path.to_path_buf()));
    }

    let json = fs::read_to_string(report_path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound(report_path.to_path_buf()),
        _ => LoadError::Io {
            path: report_path.to_path_buf(),
            source,
        },
    })?;

    let report = parse_report(&json).map_err(|e| LoadError::Parse {
        path: report_path.to_path_buf(),
        detail: e.to_string(),
    })?;

    if let Some(session) = &report.export_session {
        if session.total_assets != report.len() as u64 {
            debug!(
                "Export session claims {} assets, report lists {}",
                session.total_assets,
                report.len()
            );
        }
    }

    info!(
        "Export report loaded from {}: {} assets found",
        report_path.display(),
        report.len()
    );

    Ok(report)
}

/// Load `export_report.json` from an export directory
pub fn load_from_export_dir(export_dir: &Path) -> Result<ImportReport, LoadError> {
    load(&report_path(export_dir))
}

/// Location of the report inside `export_dir`
pub fn report_path(export_dir: &Path) -> PathBuf {
    export_dir.join(REPORT_FILE_NAME)
}

/// Parse report JSON, tolerating a leading byte order mark
pub fn parse_report(json: &str) -> serde_json::Result<ImportReport> {
    serde_json::from_str(json.trim_start_matches('\u{feff}'))
}
