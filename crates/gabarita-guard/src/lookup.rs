//! Where the guard learns the user's current tier

use std::sync::Arc;

use async_trait::async_trait;
use gabarita_api::{services::users::USER_PLAN_PATH, ApiClient, RequestContext};
use gabarita_http::StatusCode;
use serde_json::Value;

use crate::tier::PlanTier;

/// The `plano` string of a plan lookup body, if any
pub fn plan_name(body: &Value) -> Option<&str> {
    body.get("plano")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
}

/// Raw outcome of a tier lookup
#[derive(Debug, Clone, PartialEq)]
pub struct TierResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TierResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// Tier reported by a successful response
    ///
    /// `None` for non-2xx statuses. A 2xx body without a `plano` string
    /// reports [`PlanTier::Free`].
    pub fn tier(&self) -> Option<PlanTier> {
        if !self.status.is_success() {
            return None;
        }

        Some(
            plan_name(&self.body)
                .map(PlanTier::from_wire)
                .unwrap_or_default(),
        )
    }

    /// Plan name to show the user, verbatim from a successful response
    ///
    /// Names unknown to [`PlanTier`] are kept as-is even though they rank as
    /// free. `None` for non-2xx statuses.
    pub fn display_name(&self) -> Option<String> {
        if !self.status.is_success() {
            return None;
        }

        Some(
            plan_name(&self.body)
                .map(str::to_string)
                .unwrap_or_else(|| PlanTier::Free.as_str().to_string()),
        )
    }
}

/// Source of the current user's tier
#[async_trait]
pub trait TierSource: Send + Sync {
    /// Look up the tier for the session in `ctx`
    async fn fetch_tier(&self, ctx: &RequestContext) -> gabarita_api::Result<TierResponse>;
}

#[async_trait]
impl TierSource for ApiClient {
    async fn fetch_tier(&self, ctx: &RequestContext) -> gabarita_api::Result<TierResponse> {
        let (status, body) = self.get(ctx, USER_PLAN_PATH).send_with_status().await?;
        Ok(TierResponse::new(status, body))
    }
}

#[async_trait]
impl<'a, T: TierSource + ?Sized> TierSource for &'a T {
    async fn fetch_tier(&self, ctx: &RequestContext) -> gabarita_api::Result<TierResponse> {
        (**self).fetch_tier(ctx).await
    }
}

#[async_trait]
impl<T: TierSource + ?Sized> TierSource for Arc<T> {
    async fn fetch_tier(&self, ctx: &RequestContext) -> gabarita_api::Result<TierResponse> {
        (**self).fetch_tier(ctx).await
    }
}
