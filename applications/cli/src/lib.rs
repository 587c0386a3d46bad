//! Asset Bridge command-line shell
//!
//! Loads an engine export report and drives the importer from the terminal.
//!
//! This library exposes the configuration and output formatting for testing purposes.

pub mod config;
pub mod error;
pub mod render;

// Re-export commonly used types for convenience
pub use config::{AppConfig, ConfigOverrides};
pub use error::{CliError, Result};
