// ============================================================================
// Portal Core - Route Descriptor
// File: crates/portal-core/src/domain/route.rs
// Description: Static requirements attached to a declared route
// ============================================================================

use serde::{Deserialize, Serialize};

use super::account_status::AccountStatus;
use super::role::Role;

/// Role gate used when a route has no single fixed `role`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ability {
    One(Role),
    AnyOf(Vec<Role>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Exact status the session must have.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
    /// Acceptable statuses; consulted when `status` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Vec<AccountStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<Ability>,
}

impl RouteDescriptor {
    /// Any authenticated session.
    pub fn open() -> Self {
        Self::default()
    }

    pub fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    pub fn status(mut self, status: AccountStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn visibility<I: IntoIterator<Item = AccountStatus>>(mut self, statuses: I) -> Self {
        self.visibility = Some(statuses.into_iter().collect());
        self
    }

    pub fn ability(ability: Ability) -> Self {
        Self {
            ability: Some(ability),
            ..Self::default()
        }
    }
}

/// Outcome of authorizing one route for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "path", rename_all = "snake_case")]
pub enum AccessDecision {
    Render,
    RedirectTo(String),
    ShowLoading,
}

impl AccessDecision {
    pub fn redirect(path: &str) -> Self {
        AccessDecision::RedirectTo(path.to_string())
    }
}
