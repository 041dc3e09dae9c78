//! Account lifecycle status

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountStatus {
    Active,
    Pending,
    Inactive,
    Deactivated,
    Other(String),
}

impl AccountStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Pending => "pending",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Deactivated => "deactivated",
            AccountStatus::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "" => None,
            "active" => Some(AccountStatus::Active),
            "pending" => Some(AccountStatus::Pending),
            "inactive" => Some(AccountStatus::Inactive),
            "deactivated" => Some(AccountStatus::Deactivated),
            other => Some(AccountStatus::Other(other.to_string())),
        }
    }
}

/// Optional status field where a blank string counts as missing, as in
/// [`AccountStatus::parse`].
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<AccountStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(AccountStatus::parse))
}

impl From<String> for AccountStatus {
    fn from(s: String) -> Self {
        AccountStatus::parse(&s).unwrap_or(AccountStatus::Other(s))
    }
}

impl From<AccountStatus> for String {
    fn from(status: AccountStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
