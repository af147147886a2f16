//! Leaderboards

use serde_json::Value;

use crate::{client::ApiClient, context::RequestContext, error::Result};

/// Ranking type used when none is given
pub const DEFAULT_RANKING_TYPE: &str = "geral";

pub struct RankingService<'a> {
    client: &'a ApiClient,
}

impl<'a> RankingService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/ranking/{type}`, `None` meaning [`DEFAULT_RANKING_TYPE`]
    pub async fn list(&self, ctx: &RequestContext, ranking_type: Option<&str>) -> Result<Value> {
        let ranking_type = ranking_type.unwrap_or(DEFAULT_RANKING_TYPE);
        self.client
            .get(ctx, format!("/api/ranking/{ranking_type}"))
            .send()
            .await
    }

    /// `GET /api/ranking/usuario`
    pub async fn user(&self, ctx: &RequestContext) -> Result<Value> {
        self.client.get(ctx, "/api/ranking/usuario").send().await
    }
}
