// ============================================================================
// Portal Core - Menu Catalog
// File: crates/portal-core/src/catalog.rs
// Description: Compiled-in, ordered sidebar menu table
// ============================================================================

use std::collections::HashSet;
use tracing::debug;
use validator::Validate;

use crate::domain::permission::keys;
use crate::domain::{Badge, MenuEntry, MenuIcon, MenuId, MenuKind, Role};
use crate::error::DomainError;

/// Ordered, immutable list of top-level menu entries.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    entries: Vec<MenuEntry>,
}

impl MenuCatalog {
    /// Builds a catalog after checking its shape: every top-level entry has
    /// an owning role, leaf paths are absolute, branches are non-empty and
    /// group ids are unique.
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, DomainError> {
        let mut group_ids = HashSet::new();
        for entry in &entries {
            if entry.role.is_none() {
                return Err(DomainError::InvalidCatalog(format!(
                    "top-level entry {} has no role",
                    entry.id
                )));
            }
            if let MenuKind::Branch { .. } = entry.kind {
                if !group_ids.insert(entry.id) {
                    return Err(DomainError::DuplicateMenuGroup(entry.id.0));
                }
            }
            check_entry(entry)?;
        }
        debug!(
            "Menu catalog loaded: {} entries, {} groups",
            entries.len(),
            group_ids.len()
        );
        Ok(Self { entries })
    }

    /// The portal's built-in admin and seller menus.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::new(builtin_entries())
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Top-level branch entries, in catalog order. These are the groups a
    /// display mode can be configured for.
    pub fn groups(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter().filter(|e| !e.is_leaf())
    }

    pub fn find_group(&self, id: MenuId) -> Option<&MenuEntry> {
        self.groups().find(|e| e.id == id)
    }

    /// Resolves a display-settings key back to its group.
    pub fn find_group_by_key(&self, key: &str) -> Option<&MenuEntry> {
        self.groups().find(|e| e.id.as_key() == key)
    }
}

fn check_entry(entry: &MenuEntry) -> Result<(), DomainError> {
    entry.validate()?;
    match &entry.kind {
        MenuKind::Leaf { path } => {
            if !path.starts_with('/') {
                return Err(DomainError::InvalidCatalog(format!(
                    "entry {} has a relative path: {}",
                    entry.id, path
                )));
            }
        }
        MenuKind::Branch { children } => {
            if children.is_empty() {
                return Err(DomainError::InvalidCatalog(format!(
                    "group {} has no children",
                    entry.id
                )));
            }
            for child in children {
                check_entry(child)?;
            }
        }
    }
    Ok(())
}

fn builtin_entries() -> Vec<MenuEntry> {
    vec![
        // Admin
        MenuEntry::leaf(1, "Dashboard", "/admin/dashboard")
            .for_role(Role::Admin)
            .icon(MenuIcon::Dashboard),
        MenuEntry::leaf(2, "Orders", "/admin/orders")
            .for_role(Role::Admin)
            .icon(MenuIcon::Orders),
        MenuEntry::leaf(3, "Category", "/admin/category")
            .for_role(Role::Admin)
            .icon(MenuIcon::Categories),
        MenuEntry::branch(
            4,
            "Sellers",
            vec![
                MenuEntry::leaf(41, "Active Sellers", "/admin/sellers"),
                MenuEntry::leaf(42, "Seller Requests", "/admin/sellers-request")
                    .badge(Badge::Text("new".to_string())),
                MenuEntry::leaf(43, "Deactive Sellers", "/admin/deactive-sellers"),
            ],
        )
        .for_role(Role::Admin)
        .icon(MenuIcon::Sellers),
        MenuEntry::leaf(5, "Payment Requests", "/admin/payment-request")
            .for_role(Role::Admin)
            .icon(MenuIcon::Payments),
        MenuEntry::branch(
            6,
            "Awareness",
            vec![
                MenuEntry::leaf(61, "All Awareness", "/admin/awareness"),
                MenuEntry::leaf(62, "Awareness Requests", "/admin/awareness-request"),
            ],
        )
        .for_role(Role::Admin)
        .icon(MenuIcon::Awareness),
        MenuEntry::branch(
            7,
            "Hire Portal",
            vec![
                MenuEntry::leaf(71, "Hire Users", "/admin/hire-users"),
                MenuEntry::leaf(72, "Job Posts", "/admin/hire-jobs"),
            ],
        )
        .for_role(Role::Admin)
        .icon(MenuIcon::Jobs),
        MenuEntry::leaf(8, "Live Chat", "/admin/chat-seller")
            .for_role(Role::Admin)
            .icon(MenuIcon::Chat),
        // Superadmin only, like its route.
        MenuEntry::leaf(9, "Manage Admins", "/admin/manage-admins")
            .for_role(Role::Superadmin)
            .icon(MenuIcon::Settings),
        MenuEntry::leaf(19, "Menu Settings", "/admin/menu-settings")
            .for_role(Role::Admin)
            .icon(MenuIcon::Settings),
        // Seller
        MenuEntry::leaf(20, "Dashboard", "/seller/dashboard")
            .for_role(Role::Seller)
            .icon(MenuIcon::Dashboard)
            .requires(keys::DASHBOARD_VIEW),
        MenuEntry::branch(
            10,
            "Products",
            vec![
                MenuEntry::leaf(11, "Add Product", "/seller/add-product")
                    .requires(keys::PRODUCT_ADD),
                MenuEntry::leaf(12, "All Products", "/seller/all-products")
                    .requires(keys::PRODUCT_ALL),
                MenuEntry::leaf(13, "Discount Products", "/seller/discount-products")
                    .requires(keys::PRODUCT_DISCOUNT),
            ],
        )
        .for_role(Role::Seller)
        .icon(MenuIcon::Products),
        MenuEntry::branch(
            30,
            "Orders",
            vec![
                MenuEntry::leaf(31, "All Orders", "/seller/orders").requires(keys::ORDER_ALL),
                MenuEntry::leaf(32, "Returns", "/seller/returns").requires(keys::ORDER_RETURN),
            ],
        )
        .for_role(Role::Seller)
        .icon(MenuIcon::Orders),
        MenuEntry::leaf(21, "Payments", "/seller/payments")
            .for_role(Role::Seller)
            .icon(MenuIcon::Payments)
            .requires(keys::PAYMENT_VIEW),
        MenuEntry::branch(
            40,
            "Awareness",
            vec![
                MenuEntry::leaf(44, "Add Awareness", "/seller/add-awareness")
                    .requires(keys::AWARENESS_ADD),
                MenuEntry::leaf(45, "All Awareness", "/seller/awareness")
                    .requires(keys::AWARENESS_ALL),
            ],
        )
        .for_role(Role::Seller)
        .icon(MenuIcon::Awareness),
        MenuEntry::branch(
            50,
            "Chat",
            vec![
                MenuEntry::leaf(51, "Chat Customer", "/seller/chat-customer")
                    .requires(keys::CHAT_CUSTOMER),
                MenuEntry::leaf(52, "Chat Support", "/seller/chat-support")
                    .requires(keys::CHAT_SUPPORT),
            ],
        )
        .for_role(Role::Seller)
        .icon(MenuIcon::Chat),
        MenuEntry::leaf(22, "Profile", "/seller/profile")
            .for_role(Role::Seller)
            .icon(MenuIcon::Profile),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = MenuCatalog::builtin().unwrap();
        assert!(!catalog.entries().is_empty());
        assert!(catalog.entries().iter().all(|e| e.role.is_some()));
    }

    #[test]
    fn test_builtin_groups_in_order() {
        let catalog = MenuCatalog::builtin().unwrap();
        let ids: Vec<u32> = catalog.groups().map(|g| g.id.0).collect();
        assert_eq!(ids, vec![4, 6, 7, 10, 30, 40, 50]);
    }

    #[test]
    fn test_find_group_by_key() {
        let catalog = MenuCatalog::builtin().unwrap();
        assert_eq!(catalog.find_group_by_key("10").map(|g| g.title.as_str()), Some("Products"));
        // Leaves are not groups.
        assert!(catalog.find_group_by_key("1").is_none());
        assert!(catalog.find_group_by_key("ten").is_none());
    }

    #[test]
    fn test_find_group_by_key_is_exact() {
        let catalog = MenuCatalog::builtin().unwrap();
        assert!(catalog.find_group_by_key("+10").is_none());
        assert!(catalog.find_group_by_key("010").is_none());
        assert!(catalog.find_group_by_key(" 10").is_none());
    }

    fn leaf_paths<'a>(entries: &'a [MenuEntry], out: &mut Vec<&'a str>) {
        for entry in entries {
            match entry.children() {
                Some(children) => leaf_paths(children, out),
                None => out.extend(entry.path()),
            }
        }
    }

    #[test]
    fn test_every_visible_link_renders() {
        use crate::domain::{AccessDecision, AccountStatus, DisplayMode, MenuDisplaySettings, PermissionSet, Session};
        use crate::routes::RouteTable;
        use crate::services::resolve_menu;

        let catalog = MenuCatalog::builtin().unwrap();
        let routes = RouteTable::builtin();
        let mut all = Vec::new();
        leaf_paths(catalog.entries(), &mut all);
        assert!(all.contains(&"/admin/manage-admins"));

        let everything: PermissionSet = [
            "dashboard.view", "product.add", "product.all", "product.discount",
            "order.all", "order.return", "payment.view", "awareness.add",
            "awareness.all", "chat.customer", "chat.support", "admin.manage",
        ]
        .into_iter()
        .collect();
        let flat = MenuDisplaySettings::new().with(10, DisplayMode::Flat);

        for role in [Role::Admin, Role::Superadmin, Role::Seller] {
            let menu = resolve_menu(catalog.entries(), &role, &everything, &flat);
            let session = Session::new(role.clone())
                .with_status(AccountStatus::Active)
                .with_permissions(everything.iter());
            let mut paths = Vec::new();
            leaf_paths(&menu, &mut paths);
            for path in paths {
                assert_eq!(
                    routes.authorize_path(path, &session.clone().into()),
                    Some(AccessDecision::Render),
                    "{} for {}",
                    path,
                    role
                );
            }
        }
    }

    #[test]
    fn test_manage_admins_is_superadmin_only() {
        use crate::domain::{MenuDisplaySettings, PermissionSet};
        use crate::services::resolve_menu;

        let catalog = MenuCatalog::builtin().unwrap();
        let granted: PermissionSet = ["admin.manage"].into_iter().collect();
        let settings = MenuDisplaySettings::new();

        let admin = resolve_menu(catalog.entries(), &Role::Admin, &granted, &settings);
        assert!(admin.iter().all(|e| e.id != MenuId(9)));

        let superadmin = resolve_menu(catalog.entries(), &Role::Superadmin, &granted, &settings);
        assert!(superadmin.iter().any(|e| e.id == MenuId(9)));
    }

    #[test]
    fn test_rejects_entry_without_role() {
        let result = MenuCatalog::new(vec![MenuEntry::leaf(1, "Dashboard", "/dashboard")]);
        assert!(matches!(result, Err(DomainError::InvalidCatalog(_))));
    }

    #[test]
    fn test_rejects_duplicate_group() {
        let group = || {
            MenuEntry::branch(10, "Products", vec![MenuEntry::leaf(11, "Add", "/seller/add")])
                .for_role(Role::Seller)
        };
        let result = MenuCatalog::new(vec![group(), group()]);
        assert!(matches!(result, Err(DomainError::DuplicateMenuGroup(10))));
    }

    #[test]
    fn test_rejects_empty_group_and_relative_path() {
        let empty = MenuEntry::branch(10, "Products", vec![]).for_role(Role::Seller);
        assert!(matches!(
            MenuCatalog::new(vec![empty]),
            Err(DomainError::InvalidCatalog(_))
        ));

        let relative = MenuEntry::leaf(1, "Dashboard", "dashboard").for_role(Role::Admin);
        assert!(matches!(
            MenuCatalog::new(vec![relative]),
            Err(DomainError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_rejects_blank_title() {
        let blank = MenuEntry::leaf(1, "", "/admin/dashboard").for_role(Role::Admin);
        assert!(matches!(
            MenuCatalog::new(vec![blank]),
            Err(DomainError::ValidationError(_))
        ));
    }
}
