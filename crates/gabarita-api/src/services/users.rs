//! User profile and plan

use serde::Serialize;
use serde_json::Value;

use crate::{client::ApiClient, context::RequestContext, error::Result};

/// Path of the current user's plan resource
pub const USER_PLAN_PATH: &str = "/api/usuario/plano";

pub struct UserService<'a> {
    client: &'a ApiClient,
}

impl<'a> UserService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/usuario/perfil`
    pub async fn profile(&self, ctx: &RequestContext) -> Result<Value> {
        self.client.get(ctx, "/api/usuario/perfil").send().await
    }

    /// `PUT /api/usuario/perfil`
    pub async fn update_profile<T: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        user: &T,
    ) -> Result<Value> {
        self.client
            .put(ctx, "/api/usuario/perfil")
            .json(user)?
            .send()
            .await
    }

    /// `GET /api/usuario/plano`
    pub async fn plan(&self, ctx: &RequestContext) -> Result<Value> {
        self.client.get(ctx, USER_PLAN_PATH).send().await
    }
}
