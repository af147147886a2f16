//! API layer error types

use thiserror::Error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by the request helpers
///
/// A non-2xx status is not an error here; the body is returned to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection, TLS, invalid URL)
    #[error(transparent)]
    Http(#[from] gabarita_http::HttpError),

    /// The response body was not valid JSON
    #[error("Failed to decode response body: {0}")]
    Decode(String),

    /// A request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// A per-call header could not be encoded
    #[error("Invalid header {name}: {message}")]
    InvalidHeader { name: String, message: String },

    /// Configuration is unusable (e.g. malformed base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request context was cancelled before a response arrived
    #[error("Request cancelled")]
    Cancelled,

    /// Session storage failed while logging in or out
    #[error("Session error: {0}")]
    Session(#[from] gabarita_session::Error),
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Http(gabarita_http::HttpError::RequestFailed(err))
        }
    }
}
