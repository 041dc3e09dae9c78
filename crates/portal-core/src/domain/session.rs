// ============================================================================
// Portal Core - Session
// File: crates/portal-core/src/domain/session.rs
// Description: Snapshot of the caller's role, status and permissions
// ============================================================================

use serde::{Deserialize, Serialize};

use super::account_status::{self, AccountStatus};
use super::permission::PermissionSet;
use super::role::{self, Role};

/// Status and permissions fetched for an authenticated subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountProfile {
    #[serde(default, deserialize_with = "account_status::deserialize_optional")]
    pub status: Option<AccountStatus>,
    #[serde(default)]
    pub permissions: PermissionSet,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// `None` means unauthenticated.
    #[serde(default, deserialize_with = "role::deserialize_optional")]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "account_status::deserialize_optional")]
    pub status: Option<AccountStatus>,
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(role: Role) -> Self {
        Self {
            role: Some(role),
            status: None,
            permissions: PermissionSet::new(),
        }
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().collect();
        self
    }

    pub fn with_profile(mut self, profile: AccountProfile) -> Self {
        self.status = profile.status;
        self.permissions = profile.permissions;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }
}

/// Session as seen by the authorizer: either still being fetched, or ready.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    Ready(Session),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Loading => None,
            SessionState::Ready(session) => Some(session),
        }
    }
}

impl From<Session> for SessionState {
    fn from(session: Session) -> Self {
        SessionState::Ready(session)
    }
}
