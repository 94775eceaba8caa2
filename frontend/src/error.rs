//! Error types for the users UI.

use thiserror::Error;

/// Errors that can occur while talking to the users API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Terminal IO failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Whether the request itself completed, even if the server rejected it.
    pub fn is_resolved(&self) -> bool {
        matches!(self, ClientError::Server { .. } | ClientError::Parse(_))
    }
}

/// Result type for UI operations.
pub type Result<T> = std::result::Result<T, ClientError>;
