//! Error types for the importer

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load an export report
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Export report not found at: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse export report {}: {detail}", path.display())]
    Parse { path: PathBuf, detail: String },

    #[error("Failed to read export report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Core error: {0}")]
    Core(#[from] bridge_core::CoreError),

    #[error("No export report loaded")]
    NoReport,

    #[error("No assets to sync")]
    NothingToSync,

    #[error("Asset not found in export report: {0}")]
    AssetNotFound(String),

    #[error("Another sync holds the destination lock: {}", .0.display())]
    AlreadySyncing(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
