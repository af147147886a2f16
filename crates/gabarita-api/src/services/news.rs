//! News feed, public

use serde_json::Value;

use crate::{client::ApiClient, context::RequestContext, error::Result};

pub struct NewsService<'a> {
    client: &'a ApiClient,
}

impl<'a> NewsService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/noticias`
    pub async fn list(&self, ctx: &RequestContext) -> Result<Value> {
        self.client
            .get(ctx, "/api/noticias")
            .unauthenticated()
            .send()
            .await
    }

    /// `GET /api/noticias/{id}`
    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Value> {
        self.client
            .get(ctx, format!("/api/noticias/{id}"))
            .unauthenticated()
            .send()
            .await
    }
}
