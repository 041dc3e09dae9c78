// ============================================================================
// Portal Core - Role
// File: crates/portal-core/src/domain/role.rs
// Description: Coarse-grained account category
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Account role.
///
/// Role tags that the portal does not know are kept as [`Role::Other`]: the
/// session is authenticated, but no catalog entry or route role matches it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Superadmin,
    Seller,
    HireUser,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
            Role::Seller => "seller",
            Role::HireUser => "hireUser",
            Role::Other(tag) => tag,
        }
    }

    /// Parses a role tag. Blank input means "no role".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "" => None,
            "admin" => Some(Role::Admin),
            "superadmin" => Some(Role::Superadmin),
            "seller" => Some(Role::Seller),
            "hireUser" => Some(Role::HireUser),
            other => Some(Role::Other(other.to_string())),
        }
    }

    /// Roles allowed to change portal-wide settings.
    pub fn is_administrative(&self) -> bool {
        matches!(self, Role::Admin | Role::Superadmin)
    }
}

/// Optional role field where a blank string means unauthenticated.
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Role::parse))
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::parse(&s).unwrap_or(Role::Other(s))
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
