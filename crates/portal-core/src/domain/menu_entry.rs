// ============================================================================
// Portal Core - Menu Entry
// File: crates/portal-core/src/domain/menu_entry.rs
// Description: Sidebar menu node (leaf with a path, or branch with children)
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::role::Role;

/// Menu entry identifier, unique within one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(pub u32);

impl MenuId {
    /// Key used by the display-settings mapping.
    pub fn as_key(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Icon key, resolved to an asset by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuIcon {
    Dashboard,
    Products,
    Categories,
    Orders,
    Payments,
    Awareness,
    Sellers,
    Customers,
    Chat,
    Support,
    Jobs,
    Profile,
    Settings,
    Reports,
}

/// Decorative annotation; never security relevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Badge {
    Count(u32),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuKind {
    Leaf { path: String },
    Branch { children: Vec<MenuEntry> },
}

/// Menu entry.
///
/// `role` is set on top-level entries. Children usually omit it and belong
/// to their parent's audience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuEntry {
    pub id: MenuId,

    #[validate(length(min = 1, max = 100, message = "Menu title must be between 1 and 100 characters"))]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<MenuIcon>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,

    #[serde(flatten)]
    pub kind: MenuKind,
}

impl MenuEntry {
    pub fn leaf(id: u32, title: &str, path: &str) -> Self {
        Self::with_kind(id, title, MenuKind::Leaf { path: path.to_string() })
    }

    pub fn branch(id: u32, title: &str, children: Vec<MenuEntry>) -> Self {
        Self::with_kind(id, title, MenuKind::Branch { children })
    }

    fn with_kind(id: u32, title: &str, kind: MenuKind) -> Self {
        Self {
            id: MenuId(id),
            title: title.to_string(),
            role: None,
            icon: None,
            permission: None,
            badge: None,
            kind,
        }
    }

    pub fn for_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn requires(mut self, permission: &str) -> Self {
        self.permission = Some(permission.to_string());
        self
    }

    pub fn icon(mut self, icon: MenuIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, MenuKind::Leaf { .. })
    }

    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            MenuKind::Leaf { path } => Some(path),
            MenuKind::Branch { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&[MenuEntry]> {
        match &self.kind {
            MenuKind::Leaf { .. } => None,
            MenuKind::Branch { children } => Some(children),
        }
    }

    /// Copy of this entry with its children replaced. Leaves become branches.
    pub fn with_children(&self, children: Vec<MenuEntry>) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            role: self.role.clone(),
            icon: self.icon,
            permission: self.permission.clone(),
            badge: self.badge.clone(),
            kind: MenuKind::Branch { children },
        }
    }
}
