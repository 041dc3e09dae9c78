// ============================================================================
// Portal Core - Menu Display Settings
// File: crates/portal-core/src/domain/display_setting.rs
// Description: Per-group presentation mode (grouped / flat)
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::menu_entry::MenuId;

/// How a menu group is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisplayMode {
    /// Parent entry with its children nested underneath.
    #[default]
    Grouped,
    /// Children promoted to the top level, parent dropped.
    Flat,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Grouped => "grouped",
            DisplayMode::Flat => "flat",
        }
    }
}

impl From<String> for DisplayMode {
    /// Anything other than `flat` reads as grouped.
    fn from(s: String) -> Self {
        if s == "flat" {
            DisplayMode::Flat
        } else {
            DisplayMode::Grouped
        }
    }
}

impl From<DisplayMode> for String {
    fn from(mode: DisplayMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Group id (stringified [`MenuId`]) to display mode.
///
/// One mapping is shared by every session; it is not keyed per seller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuDisplaySettings(BTreeMap<String, DisplayMode>);

impl MenuDisplaySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode_for(&self, id: MenuId) -> DisplayMode {
        self.0.get(&id.as_key()).copied().unwrap_or_default()
    }

    pub fn set(&mut self, id: MenuId, mode: DisplayMode) {
        self.0.insert(id.as_key(), mode);
    }

    pub fn with(mut self, id: u32, mode: DisplayMode) -> Self {
        self.set(MenuId(id), mode);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DisplayMode)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, DisplayMode)> for MenuDisplaySettings {
    fn from_iter<I: IntoIterator<Item = (String, DisplayMode)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
