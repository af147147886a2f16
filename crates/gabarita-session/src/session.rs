//! Explicit session handle

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::Result;
use crate::storage::{InMemoryTokenStore, TokenStore};
use crate::token::SessionToken;

/// Handle to the current session, shared by the API layer and the guard
///
/// Cloning is cheap; clones see the same underlying store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by memory only
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTokenStore::new()))
    }

    /// Session that starts authenticated with `token`
    pub fn with_token(token: SessionToken) -> Self {
        Self::new(Arc::new(InMemoryTokenStore::with_token(token)))
    }

    /// Current token, `None` when signed out
    ///
    /// Storage failures read as "no session".
    pub fn token(&self) -> Option<SessionToken> {
        match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to read session token, treating as signed out: {}", e);
                None
            }
        }
    }

    /// Current token, surfacing storage failures
    pub fn try_token(&self) -> Result<Option<SessionToken>> {
        self.store.load()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Store a token (login)
    pub fn sign_in(&self, token: SessionToken) -> Result<()> {
        debug!("Storing session token");
        self.store.save(&token)
    }

    /// Remove the token (logout)
    pub fn sign_out(&self) -> Result<()> {
        debug!("Clearing session token");
        self.store.clear()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
