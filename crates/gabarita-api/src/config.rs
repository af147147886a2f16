//! API layer configuration

use gabarita_http::HttpConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, Result};

/// Environment variable selecting the backend base URL
pub const API_URL_ENV: &str = "GABARITA_API_URL";

/// Base URL used when the environment does not provide one
pub const DEFAULT_API_BASE_URL: &str = "https://gabarita-ai-backend.onrender.com";

/// API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend origin; request paths (`/api/...`) are appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            http: HttpConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Configuration with the base URL taken from `GABARITA_API_URL`
    ///
    /// Unset or blank values fall back to [`DEFAULT_API_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(default_base_url);
        debug!("Using API base URL {}", base_url);

        Self {
            base_url,
            ..Default::default()
        }
    }

    /// Configuration pointing at an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_http(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    /// Check that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ApiError::Config(format!(
                "Unsupported base URL scheme: {}",
                other
            ))),
        }
    }

    /// Absolute URL for a request path such as `/api/planos`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
