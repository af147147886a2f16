//! Session handling for the Gabarita client
//!
//! The session token is the only client-side state. It is written at login,
//! cleared at logout and read by every authenticated request. A [`Session`]
//! is passed explicitly to whoever needs it instead of being read from a
//! global store.

pub mod error;
pub mod session;
pub mod storage;
pub mod token;

pub use error::{Error, Result};
pub use session::Session;
pub use storage::{FileTokenStore, InMemoryTokenStore, TokenStore, AUTH_TOKEN_KEY};
pub use token::SessionToken;
