//! HTTP transport error types

use thiserror::Error;

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// HTTP transport errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network request failed
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid proxy configuration
    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),

    /// Client build error
    #[error("Failed to build HTTP client: {0}")]
    BuildError(String),
}

impl HttpError {
    /// Whether the request never reached the server (DNS, refused connection, timeout)
    pub fn is_connectivity(&self) -> bool {
        match self {
            HttpError::RequestFailed(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HttpError::InvalidUrl("nope".to_string());
        assert_eq!(err.to_string(), "Invalid URL: nope");

        let err = HttpError::InvalidProxy("bad".to_string());
        assert_eq!(err.to_string(), "Invalid proxy configuration: bad");
    }

    #[test]
    fn test_non_transport_errors_are_not_connectivity() {
        assert!(!HttpError::BuildError("x".to_string()).is_connectivity());
        assert!(!HttpError::InvalidUrl("x".to_string()).is_connectivity());
    }
}
