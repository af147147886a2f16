//! HTTP client implementation

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use tracing::debug;

use crate::{
    config::HttpConfig,
    error::{HttpError, Result},
};

/// Production HTTP client
///
/// Cheap to share behind an `Arc`; the inner reqwest client pools connections.
#[derive(Debug)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .redirect(if config.max_redirects > 0 {
                reqwest::redirect::Policy::limited(config.max_redirects)
            } else {
                reqwest::redirect::Policy::none()
            });

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| HttpError::InvalidProxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        if config.pool_enabled {
            builder = builder.pool_idle_timeout(config.pool_idle_timeout);
        } else {
            builder = builder.pool_max_idle_per_host(0);
        }

        let inner = builder
            .build()
            .map_err(|e| HttpError::BuildError(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Create HTTP client with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(HttpConfig::default())
    }

    /// Get underlying reqwest client (for advanced usage)
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Get configuration
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Start a request against an absolute URL
    pub fn request(&self, method: Method, url: &str) -> Result<RequestBuilder> {
        let url = url
            .parse::<url::Url>()
            .map_err(|e| HttpError::InvalidUrl(format!("{url}: {e}")))?;

        Ok(self.inner.request(method, url))
    }

    /// Send a prepared request
    ///
    /// Any status code is a successful send; only transport failures are errors.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.build()?;
        debug!("HTTP {} {}", request.method(), request.url());

        let response = self.inner.execute(request).await?;
        debug!("HTTP response status: {}", response.status());

        Ok(response)
    }
}

/// Create a shared HTTP client (Arc-wrapped for cloning)
pub fn shared_client(config: HttpConfig) -> Result<Arc<HttpClient>> {
    Ok(Arc::new(HttpClient::new(config)?))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_client_creation_with_defaults() {
        let client = HttpClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_creation_with_config() {
        let config = HttpConfig::default().with_timeout(Duration::from_secs(10));

        let client = HttpClient::new(config).unwrap();
        assert_eq!(client.config().timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_client_with_proxy() {
        let config = HttpConfig::default().with_proxy("http://proxy.example.com:8080");

        let client = HttpClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_https_request_builds() {
        let client = HttpClient::with_defaults().unwrap();
        let request = client
            .request(Method::GET, "https://gabarita-ai-backend.onrender.com/api/noticias")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.url().scheme(), "https");
    }

    #[test]
    fn test_invalid_url() {
        let client = HttpClient::with_defaults().unwrap();
        let result = client.request(Method::GET, "not a url");
        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_send_returns_error_statuses_untouched() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body(r#"{"success":false}"#)
            .create_async()
            .await;

        let client = HttpClient::with_defaults().unwrap();
        let request = client
            .request(Method::GET, &format!("{}/missing", server.url()))
            .unwrap();
        let response = client.send(request).await.unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_send_connection_refused_is_connectivity_error() {
        let client = HttpClient::with_defaults().unwrap();
        let request = client.request(Method::GET, "http://127.0.0.1:1/").unwrap();

        let err = client.send(request).await.unwrap_err();
        assert!(err.is_connectivity());
    }

    #[test]
    fn test_shared_client_creation() {
        let client = shared_client(HttpConfig::default());
        assert!(client.is_ok());
    }
}
