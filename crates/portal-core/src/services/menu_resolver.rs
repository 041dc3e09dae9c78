// ============================================================================
// Portal Core - Menu Resolver
// File: crates/portal-core/src/services/menu_resolver.rs
// ============================================================================
//! Filters the menu catalog down to the sidebar a session may see.

use tracing::trace;

use crate::domain::{DisplayMode, MenuDisplaySettings, MenuEntry, MenuKind, PermissionSet, Role};

/// Resolves the sidebar for `role`.
///
/// Top-level order is preserved. `superadmin` receives every `admin` entry
/// unfiltered. For other roles, leaves are kept when their permission is
/// absent or held; branches keep the children that pass the same check and
/// are dropped when none do. A `flat` group splices its surviving children
/// in place of the parent.
///
/// A branch's own `permission` is not consulted; only leaves and direct
/// children of branches are gated.
pub fn resolve_menu(
    catalog: &[MenuEntry],
    role: &Role,
    permissions: &PermissionSet,
    display_settings: &MenuDisplaySettings,
) -> Vec<MenuEntry> {
    let mut menu = Vec::new();

    for entry in catalog.iter().filter(|e| visible_to(e, role)) {
        if *role == Role::Superadmin {
            menu.push(entry.clone());
            continue;
        }

        match &entry.kind {
            MenuKind::Leaf { .. } => {
                if permissions.allows(entry.permission.as_deref()) {
                    menu.push(entry.clone());
                }
            }
            MenuKind::Branch { children } => {
                let allowed: Vec<MenuEntry> = children
                    .iter()
                    .filter(|child| permissions.allows(child.permission.as_deref()))
                    .cloned()
                    .collect();

                if allowed.is_empty() {
                    trace!("Menu group {} has no visible children", entry.id);
                    continue;
                }

                match display_settings.mode_for(entry.id) {
                    DisplayMode::Flat => menu.extend(allowed),
                    DisplayMode::Grouped => menu.push(entry.with_children(allowed)),
                }
            }
        }
    }

    menu
}

fn visible_to(entry: &MenuEntry, role: &Role) -> bool {
    match &entry.role {
        Some(owner) => owner == role || (*role == Role::Superadmin && *owner == Role::Admin),
        None => false,
    }
}
