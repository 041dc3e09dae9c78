//! Domain services (business logic)

pub mod menu_resolver;
pub mod route_authorizer;
pub mod session_service;
pub mod menu_display_service;
pub mod navigation_service;

pub use menu_resolver::resolve_menu;
pub use route_authorizer::authorize;
pub use session_service::SessionService;
pub use menu_display_service::{MenuDisplayService, MenuGroupSummary};
pub use navigation_service::NavigationService;
