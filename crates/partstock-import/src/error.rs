//! Error types for the import driver

use thiserror::Error;

/// Import-specific errors
#[derive(Error, Debug)]
pub enum ImportError {
    /// Request could not be sent or completed
    #[error("Request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status
    #[error("Server returned HTTP {status}")]
    Api { status: u16 },
}

impl From<reqwest::Error> for ImportError {
    fn from(err: reqwest::Error) -> Self {
        ImportError::Request(err.to_string())
    }
}
