// ============================================================================
// Portal Core - Route Table
// File: crates/portal-core/src/routes.rs
// Description: Declared portal routes and their access requirements
// ============================================================================

use crate::domain::{AccessDecision, Ability, Role, RouteDescriptor, SessionState};
use crate::services::route_authorizer::authorize;

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<(String, RouteDescriptor)>,
}

impl RouteTable {
    pub fn new(routes: Vec<(String, RouteDescriptor)>) -> Self {
        Self { routes }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_routes())
    }

    /// Exact-path lookup.
    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes
            .iter()
            .find(|(declared, _)| declared == path)
            .map(|(_, descriptor)| descriptor)
    }

    /// `None` when `path` is not a declared route.
    pub fn authorize_path(&self, path: &str, session: &SessionState) -> Option<AccessDecision> {
        self.find(path).map(|route| authorize(route, session))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteDescriptor)> {
        self.routes.iter().map(|(p, d)| (p.as_str(), d))
    }
}

fn builtin_routes() -> Vec<(String, RouteDescriptor)> {
    use crate::domain::AccountStatus::{Active, Deactivated, Inactive, Pending};

    let admin = || RouteDescriptor::ability(Ability::AnyOf(vec![Role::Admin, Role::Superadmin]));
    let seller_active = || RouteDescriptor::role(Role::Seller).status(Active);
    let hire_active = || RouteDescriptor::role(Role::HireUser).status(Active);

    let routes = vec![
        // Shared
        ("/", RouteDescriptor::open()),
        (
            "/notifications",
            RouteDescriptor::ability(Ability::AnyOf(vec![Role::Admin, Role::Seller, Role::HireUser])),
        ),
        // Admin
        ("/admin/dashboard", admin()),
        ("/admin/orders", admin()),
        ("/admin/category", admin()),
        ("/admin/sellers", admin()),
        ("/admin/sellers-request", admin()),
        ("/admin/deactive-sellers", admin()),
        ("/admin/payment-request", admin()),
        ("/admin/awareness", admin()),
        ("/admin/awareness-request", admin()),
        ("/admin/hire-users", admin()),
        ("/admin/hire-jobs", admin()),
        ("/admin/chat-seller", admin()),
        ("/admin/menu-settings", admin()),
        (
            "/admin/manage-admins",
            RouteDescriptor::ability(Ability::AnyOf(vec![Role::Superadmin])),
        ),
        // Seller
        (
            "/seller/dashboard",
            RouteDescriptor::role(Role::Seller).visibility([Active, Pending]),
        ),
        ("/seller/add-product", seller_active()),
        ("/seller/all-products", seller_active()),
        ("/seller/discount-products", seller_active()),
        ("/seller/orders", seller_active()),
        ("/seller/returns", seller_active()),
        ("/seller/payments", seller_active()),
        ("/seller/add-awareness", seller_active()),
        ("/seller/awareness", seller_active()),
        ("/seller/chat-customer", seller_active()),
        (
            "/seller/chat-support",
            RouteDescriptor::role(Role::Seller).visibility([Active, Pending, Deactivated]),
        ),
        (
            "/seller/profile",
            RouteDescriptor::role(Role::Seller).visibility([Active, Pending, Deactivated]),
        ),
        ("/seller/account-pending", RouteDescriptor::ability(Ability::One(Role::Seller))),
        ("/seller/account-deactive", RouteDescriptor::ability(Ability::One(Role::Seller))),
        // Hire portal
        ("/hire/dashboard", hire_active()),
        ("/hire/jobs", hire_active()),
        ("/hire/applications", hire_active()),
        (
            "/hire/profile",
            RouteDescriptor::role(Role::HireUser).visibility([Active, Pending, Inactive]),
        ),
        ("/hire/account-pending", RouteDescriptor::ability(Ability::One(Role::HireUser))),
        ("/hire/account-inactive", RouteDescriptor::ability(Ability::One(Role::HireUser))),
    ];

    routes
        .into_iter()
        .map(|(path, descriptor)| (path.to_string(), descriptor))
        .collect()
}
