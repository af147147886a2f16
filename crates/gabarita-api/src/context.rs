//! Per-request context

use gabarita_session::Session;
use tokio_util::sync::CancellationToken;

/// Session and cancellation handle passed into every API call
///
/// A view owns one context; cancelling it when the view is torn down makes
/// in-flight calls return [`crate::ApiError::Cancelled`] instead of a body.
#[derive(Debug, Clone)]
pub struct RequestContext {
    session: Session,
    cancel: CancellationToken,
}

impl RequestContext {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancel(session: Session, cancel: CancellationToken) -> Self {
        Self { session, cancel }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Context for a nested view: shares the session, cancelled with its parent
    pub fn child(&self) -> Self {
        Self {
            session: self.session.clone(),
            cancel: self.cancel.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
