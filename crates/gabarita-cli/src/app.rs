// Application context shared by every command

use std::sync::Arc;

use gabarita_api::{ApiClient, ApiConfig, RequestContext};
use gabarita_session::{FileTokenStore, Session};
use tracing::debug;

use crate::error::CliResult;

/// API client plus the request context of the running command
#[derive(Debug, Clone)]
pub struct AppContext {
    client: ApiClient,
    ctx: RequestContext,
}

impl AppContext {
    pub fn new(client: ApiClient, session: Session) -> Self {
        Self {
            client,
            ctx: RequestContext::new(session),
        }
    }

    /// Build from the environment and the on-disk session
    ///
    /// `api_url` overrides `GABARITA_API_URL`.
    pub fn load(api_url: Option<&str>) -> CliResult<Self> {
        let config = match api_url {
            Some(url) => ApiConfig::with_base_url(url),
            None => ApiConfig::from_env(),
        };
        let client = ApiClient::new(config)?;

        let store = FileTokenStore::with_default_path()?;
        debug!("Session file: {}", store.path().display());

        Ok(Self::new(client, Session::new(Arc::new(store))))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn ctx(&self) -> &RequestContext {
        &self.ctx
    }

    pub fn session(&self) -> &Session {
        self.ctx.session()
    }

    /// Cancel in-flight requests on Ctrl-C
    pub fn cancel_on_ctrl_c(&self) {
        let token = self.ctx.cancel_token().clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("Interrupted, cancelling requests");
                token.cancel();
            }
        });
    }
}
