//! Study dashboard

use serde_json::Value;

use crate::{client::ApiClient, context::RequestContext, error::Result};

pub struct DashboardService<'a> {
    client: &'a ApiClient,
}

impl<'a> DashboardService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/dashboard/estatisticas`
    pub async fn stats(&self, ctx: &RequestContext) -> Result<Value> {
        self.client.get(ctx, "/api/dashboard/estatisticas").send().await
    }

    /// `GET /api/dashboard/progresso`
    pub async fn progress(&self, ctx: &RequestContext) -> Result<Value> {
        self.client.get(ctx, "/api/dashboard/progresso").send().await
    }

    /// `GET /api/dashboard/atividades`
    pub async fn recent_activity(&self, ctx: &RequestContext) -> Result<Value> {
        self.client.get(ctx, "/api/dashboard/atividades").send().await
    }
}
