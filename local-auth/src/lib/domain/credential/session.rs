use chrono::DateTime;
use chrono::Utc;

use crate::domain::credential::models::ProviderId;
use crate::domain::credential::models::SessionId;
use crate::domain::credential::models::VerifiedIdentity;

/// Lifecycle state of an [`AuthSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Closed,
}

/// Authenticated identity attached to a parent session.
///
/// Sessions are only created from a [`VerifiedIdentity`], so holding one
/// proves a successful verification happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    parent: SessionId,
    identity: VerifiedIdentity,
    opened_at: DateTime<Utc>,
    state: SessionState,
}

impl AuthSession {
    pub(crate) fn open(parent: SessionId, identity: VerifiedIdentity) -> Self {
        Self {
            parent,
            identity,
            opened_at: Utc::now(),
            state: SessionState::Open,
        }
    }

    pub fn parent(&self) -> SessionId {
        self.parent
    }

    /// Verified user name.
    pub fn user(&self) -> &str {
        self.identity.username()
    }

    pub fn provider_id(&self) -> &ProviderId {
        self.identity.provider_id()
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    /// Transition to `Closed`. Closing a closed session is a no-op.
    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }

    /// Local credentials do not expire apart from the parent session, so there
    /// is nothing to renew.
    pub fn refresh(&self) {}
}
