//! Subscription plans

use serde_json::{json, Value};

use crate::{client::ApiClient, context::RequestContext, error::Result};

pub struct PlanService<'a> {
    client: &'a ApiClient,
}

impl<'a> PlanService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/planos`, public
    pub async fn list(&self, ctx: &RequestContext) -> Result<Value> {
        self.client
            .get(ctx, "/api/planos")
            .unauthenticated()
            .send()
            .await
    }

    /// `POST /api/planos/assinar`
    pub async fn subscribe(&self, ctx: &RequestContext, plan_id: &str) -> Result<Value> {
        self.client
            .post(ctx, "/api/planos/assinar")
            .json(&json!({ "plano_id": plan_id }))?
            .send()
            .await
    }
}
