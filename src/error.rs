//! Error types for amdnamer.

use thiserror::Error;

/// Result type for amdnamer operations.
pub type Result<T> = std::result::Result<T, NamerError>;

/// Main error type for amdnamer.
#[derive(Error, Debug)]
pub enum NamerError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General error with message
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for NamerError {
    fn from(err: anyhow::Error) -> Self {
        NamerError::Other(err.to_string())
    }
}

impl From<&str> for NamerError {
    fn from(s: &str) -> Self {
        NamerError::Other(s.to_string())
    }
}

impl From<String> for NamerError {
    fn from(s: String) -> Self {
        NamerError::Other(s)
    }
}
