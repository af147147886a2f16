//! Help center: FAQ and support tickets

use serde_json::{json, Value};

use crate::{client::ApiClient, context::RequestContext, error::Result};

pub struct SupportService<'a> {
    client: &'a ApiClient,
}

impl<'a> SupportService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/ajuda/faq`, public
    pub async fn faq(&self, ctx: &RequestContext) -> Result<Value> {
        self.client
            .get(ctx, "/api/ajuda/faq")
            .unauthenticated()
            .send()
            .await
    }

    /// `POST /api/ajuda/ticket`
    pub async fn submit_ticket(
        &self,
        ctx: &RequestContext,
        subject: &str,
        message: &str,
    ) -> Result<Value> {
        self.client
            .post(ctx, "/api/ajuda/ticket")
            .json(&json!({ "assunto": subject, "mensagem": message }))?
            .send()
            .await
    }

    /// `GET /api/ajuda/tickets`
    pub async fn tickets(&self, ctx: &RequestContext) -> Result<Value> {
        self.client.get(ctx, "/api/ajuda/tickets").send().await
    }
}
