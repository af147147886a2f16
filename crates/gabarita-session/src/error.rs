//! Error types for session storage

use thiserror::Error;

/// Result type for session operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing the session
#[derive(Error, Debug)]
pub enum Error {
    #[error("Session token cannot be empty")]
    EmptyToken,

    #[error("Could not determine home directory for session storage")]
    NoHomeDirectory,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
