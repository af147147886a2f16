//! Shared HTTP transport for the Gabarita client
//!
//! Wraps a single configured `reqwest::Client` used by every API resource group.
//!
//! ## Features
//!
//! - **Configurable**: optional timeouts, proxy, user-agent, redirects
//! - **Connection pooling**: managed by the underlying reqwest client
//! - **No hidden policy**: no retries and no status translation; callers see the raw response

pub mod client;
pub mod config;
pub mod error;

pub use client::{shared_client, HttpClient};
pub use config::HttpConfig;
pub use error::{HttpError, Result};

/// Re-export commonly used types
pub use reqwest::{header, Method, RequestBuilder, Response, StatusCode};
