//! Request helpers for the Gabarita backend API
//!
//! One service per backend resource group, one async function per operation.
//! Every function performs exactly one HTTP request and returns the parsed
//! JSON body as-is: there is no status-code translation and no error
//! normalization. Callers inspect the body's own `success` flag, optionally
//! through [`ApiEnvelope`].
//!
//! ```no_run
//! use gabarita_api::{ApiClient, ApiConfig, RequestContext};
//! use gabarita_session::Session;
//!
//! # async fn run() -> gabarita_api::Result<()> {
//! let client = ApiClient::new(ApiConfig::from_env())?;
//! let ctx = RequestContext::new(Session::in_memory());
//! let news = client.news().list(&ctx).await?;
//! println!("{news}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod services;

pub use client::{ApiClient, ApiRequest};
pub use config::{ApiConfig, API_URL_ENV, DEFAULT_API_BASE_URL};
pub use context::RequestContext;
pub use error::{ApiError, Result};
pub use models::{ApiEnvelope, CheckoutSession, ExamConfig};
pub use services::{
    AuthService, DashboardService, EssayService, ExamService, NewsService, PaymentService,
    PlanService, QuestionService, RankingService, SupportService, UserService,
};
