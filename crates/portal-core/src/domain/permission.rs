// ============================================================================
// Portal Core - Permission Set
// File: crates/portal-core/src/domain/permission.rs
// Description: Fine-grained capability keys granted to a session
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Permission keys used by the built-in catalog.
pub mod keys {
    pub const DASHBOARD_VIEW: &str = "dashboard.view";
    pub const PRODUCT_ADD: &str = "product.add";
    pub const PRODUCT_ALL: &str = "product.all";
    pub const PRODUCT_DISCOUNT: &str = "product.discount";
    pub const CATEGORY_MANAGE: &str = "category.manage";
    pub const ORDER_ALL: &str = "order.all";
    pub const ORDER_RETURN: &str = "order.return";
    pub const PAYMENT_VIEW: &str = "payment.view";
    pub const AWARENESS_ADD: &str = "awareness.add";
    pub const AWARENESS_ALL: &str = "awareness.all";
    pub const CHAT_CUSTOMER: &str = "chat.customer";
    pub const CHAT_SUPPORT: &str = "chat.support";
    pub const HIRE_JOB_ADD: &str = "hire.job.add";
    pub const HIRE_JOB_ALL: &str = "hire.job.all";
    pub const PROFILE_EDIT: &str = "profile.edit";
}

/// Set of permission keys. A missing set is the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// `true` when `requirement` is absent or held.
    pub fn allows(&self, requirement: Option<&str>) -> bool {
        requirement.is_none_or(|key| self.contains(key))
    }

    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.0.insert(key.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
