//! # Portal Core
//!
//! Domain model, the compiled-in menu catalog and route table, the menu
//! resolver, the route authorizer, and the repository ports they read from.

pub mod domain;
pub mod catalog;
pub mod routes;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use catalog::MenuCatalog;
pub use routes::RouteTable;
pub use error::DomainError;
