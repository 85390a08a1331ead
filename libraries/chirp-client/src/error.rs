//! Error types for the bootstrap client.

use thiserror::Error;

/// Errors that can occur while bootstrapping against the backend.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the configured deadline
    #[error("Request timed out")]
    Timeout,

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Init data was rejected by the backend
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid backend URL
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for bootstrap client operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;
