//! Essays ("redação")

use serde_json::{json, Value};

use crate::{client::ApiClient, context::RequestContext, error::Result};

pub struct EssayService<'a> {
    client: &'a ApiClient,
}

impl<'a> EssayService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /api/redacao/enviar`
    pub async fn submit(&self, ctx: &RequestContext, theme: &str, text: &str) -> Result<Value> {
        self.client
            .post(ctx, "/api/redacao/enviar")
            .json(&json!({ "tema": theme, "texto": text }))?
            .send()
            .await
    }

    /// `GET /api/redacao/historico`
    pub async fn list(&self, ctx: &RequestContext) -> Result<Value> {
        self.client.get(ctx, "/api/redacao/historico").send().await
    }

    /// `GET /api/redacao/{id}`
    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Value> {
        self.client
            .get(ctx, format!("/api/redacao/{id}"))
            .send()
            .await
    }
}
