//! # Portal Core - Domain Module
//!
//! Domain types for navigation resolution and route authorization.

pub mod role;
pub mod account_status;
pub mod permission;
pub mod menu_entry;
pub mod display_setting;
pub mod session;
pub mod route;

// Re-export all entities and enums
pub use role::Role;
pub use account_status::AccountStatus;
pub use permission::PermissionSet;
pub use menu_entry::{Badge, MenuEntry, MenuIcon, MenuId, MenuKind};
pub use display_setting::{DisplayMode, MenuDisplaySettings};
pub use session::{AccountProfile, Session, SessionState};
pub use route::{AccessDecision, Ability, RouteDescriptor};
