//! Question bank

use serde_json::{json, Value};

use crate::{client::ApiClient, context::RequestContext, error::Result};

pub struct QuestionService<'a> {
    client: &'a ApiClient,
}

impl<'a> QuestionService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/questoes?<filters>`
    pub async fn list<K, V>(
        &self,
        ctx: &RequestContext,
        filters: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Value>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.client
            .get(ctx, "/api/questoes")
            .query(filters)
            .send()
            .await
    }

    /// `GET /api/questoes/{id}`
    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Value> {
        self.client
            .get(ctx, format!("/api/questoes/{id}"))
            .send()
            .await
    }

    /// `POST /api/questoes/{id}/responder`
    pub async fn answer(&self, ctx: &RequestContext, id: &str, answer: &str) -> Result<Value> {
        self.client
            .post(ctx, format!("/api/questoes/{id}/responder"))
            .json(&json!({ "resposta": answer }))?
            .send()
            .await
    }
}
