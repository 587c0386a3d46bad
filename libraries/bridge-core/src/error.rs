/// Core error types for Asset Bridge
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Asset Bridge
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid input (settings out of range, bad paths)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Host asset database failures
    #[error("Host error: {0}")]
    Host(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a host error
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }
}
