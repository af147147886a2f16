//! Practice exams ("simulados")

use serde::Serialize;
use serde_json::{json, Value};

use crate::{client::ApiClient, context::RequestContext, error::Result};

pub struct ExamService<'a> {
    client: &'a ApiClient,
}

impl<'a> ExamService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /api/simulados/criar`, config sent verbatim
    pub async fn create<T: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        config: &T,
    ) -> Result<Value> {
        self.client
            .post(ctx, "/api/simulados/criar")
            .json(config)?
            .send()
            .await
    }

    /// `GET /api/simulados`
    pub async fn list(&self, ctx: &RequestContext) -> Result<Value> {
        self.client.get(ctx, "/api/simulados").send().await
    }

    /// `GET /api/simulados/{id}`
    pub async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Value> {
        self.client
            .get(ctx, format!("/api/simulados/{id}"))
            .send()
            .await
    }

    /// `POST /api/simulados/{id}/finalizar`
    pub async fn submit<T: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        id: &str,
        answers: &T,
    ) -> Result<Value> {
        let answers = serde_json::to_value(answers)?;
        self.client
            .post(ctx, format!("/api/simulados/{id}/finalizar"))
            .json(&json!({ "respostas": answers }))?
            .send()
            .await
    }
}
