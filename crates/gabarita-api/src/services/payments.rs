//! Payments
//!
//! Creating a payment yields a provider checkout URL (`init_point`); opening
//! it is the caller's job. See [`crate::CheckoutSession`].

use serde_json::{json, Value};

use crate::{client::ApiClient, context::RequestContext, error::Result};

pub struct PaymentService<'a> {
    client: &'a ApiClient,
}

impl<'a> PaymentService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /api/pagamentos/criar`
    pub async fn create(&self, ctx: &RequestContext, plan_id: &str) -> Result<Value> {
        self.client
            .post(ctx, "/api/pagamentos/criar")
            .json(&json!({ "plano_id": plan_id }))?
            .send()
            .await
    }

    /// `GET /api/pagamentos/verificar/{id}`
    pub async fn verify(&self, ctx: &RequestContext, payment_id: &str) -> Result<Value> {
        self.client
            .get(ctx, format!("/api/pagamentos/verificar/{payment_id}"))
            .send()
            .await
    }

    /// `GET /api/pagamentos/historico`
    pub async fn history(&self, ctx: &RequestContext) -> Result<Value> {
        self.client.get(ctx, "/api/pagamentos/historico").send().await
    }
}
