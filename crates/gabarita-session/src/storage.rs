//! Persistence backends for the session token
//!
//! The token lives under a single key, mirroring browser local storage.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::token::SessionToken;

/// Key under which the token is persisted
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Repository trait for storing and retrieving the session token
pub trait TokenStore: Send + Sync {
    /// Load the stored token, `None` when no session exists
    fn load(&self) -> Result<Option<SessionToken>>;

    /// Persist a token, replacing any previous one
    fn save(&self, token: &SessionToken) -> Result<()>;

    /// Remove the stored token
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(rename = "authToken", default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
}

/// File-based token store
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store backed by the given file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a store at `~/.gabarita/session.json`
    pub fn with_default_path() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::NoHomeDirectory)?;
        Ok(Self::new(home.join(".gabarita").join("session.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<SessionToken>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let stored: StoredSession = serde_json::from_str(&content)?;
        Ok(stored.auth_token.and_then(|raw| SessionToken::new(raw).ok()))
    }

    fn save(&self, token: &SessionToken) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let stored = StoredSession {
            auth_token: Some(token.as_str().to_string()),
        };
        let content = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory token store (for testing and embedding)
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<SessionToken>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token
    pub fn with_token(token: SessionToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<SessionToken>> {
        let token = self
            .token
            .read()
            .map_err(|e| Error::Internal(format!("Failed to read token: {}", e)))?;
        Ok(token.clone())
    }

    fn save(&self, token: &SessionToken) -> Result<()> {
        let mut stored = self
            .token
            .write()
            .map_err(|e| Error::Internal(format!("Failed to write token: {}", e)))?;
        *stored = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut stored = self
            .token
            .write()
            .map_err(|e| Error::Internal(format!("Failed to clear token: {}", e)))?;
        *stored = None;
        Ok(())
    }
}
