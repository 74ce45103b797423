//! Error types for client-side session handling.

use thiserror::Error;

/// Errors that can occur when reading or writing session state.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Backing store could not be read or written
    #[error("Session store error: {0}")]
    Store(String),

    /// IO error on a file-backed store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record is not valid JSON for its type
    #[error("Corrupt session record: {0}")]
    CorruptRecord(#[from] serde_json::Error),

    /// Token cannot be used as an HTTP header value
    #[error("Invalid authorization header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Invalid session configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
