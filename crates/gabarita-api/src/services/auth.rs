//! Authentication: login, registration and logout

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use gabarita_session::SessionToken;

use crate::{client::ApiClient, context::RequestContext, error::Result};

pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /api/auth/login`
    ///
    /// When the body reports success and carries a token (`data.token` or
    /// `token`), the token replaces the one in the context's session. Any
    /// other outcome leaves the session signed out, so a previous user's
    /// token never survives a login attempt.
    pub async fn login(&self, ctx: &RequestContext, email: &str, password: &str) -> Result<Value> {
        let body = self
            .client
            .post(ctx, "/api/auth/login")
            .unauthenticated()
            .json(&json!({ "email": email, "password": password }))?
            .send()
            .await?;

        if let Some(token) = login_token(&body) {
            ctx.session().sign_in(token)?;
            info!("Signed in as {}", email);
        } else {
            debug!("Login response carried no token, clearing session");
            ctx.session().sign_out()?;
        }

        Ok(body)
    }

    /// `POST /api/auth/register`, user payload sent verbatim
    pub async fn register<T: Serialize + ?Sized>(
        &self,
        ctx: &RequestContext,
        user: &T,
    ) -> Result<Value> {
        self.client
            .post(ctx, "/api/auth/register")
            .unauthenticated()
            .json(user)?
            .send()
            .await
    }

    /// Drop the local session; no server call
    pub fn logout(&self, ctx: &RequestContext) -> Result<()> {
        ctx.session().sign_out()?;
        info!("Signed out");
        Ok(())
    }
}

fn login_token(body: &Value) -> Option<SessionToken> {
    if body.get("success").and_then(Value::as_bool) != Some(true) {
        return None;
    }

    body.pointer("/data/token")
        .or_else(|| body.get("token"))
        .and_then(Value::as_str)
        .and_then(|raw| SessionToken::new(raw).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_token_locations() {
        let nested = json!({ "success": true, "data": { "token": "a" } });
        assert_eq!(login_token(&nested).unwrap().as_str(), "a");

        let top = json!({ "success": true, "token": "b" });
        assert_eq!(login_token(&top).unwrap().as_str(), "b");
    }

    #[test]
    fn test_login_token_requires_success() {
        assert!(login_token(&json!({ "success": false, "token": "x" })).is_none());
        assert!(login_token(&json!({ "token": "x" })).is_none());
        assert!(login_token(&json!({ "success": true, "token": "" })).is_none());
    }
}
