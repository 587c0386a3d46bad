/// CLI error types
use bridge_importer::ImportError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("Refusing to delete {} without --yes", .0.display())]
    CleanNotConfirmed(PathBuf),
}
