//! # Portal API
//!
//! HTTP handlers, session extraction, DTOs and the response envelope.

pub mod handlers;
pub mod extract;
pub mod dto;
pub mod error;
pub mod response;
pub mod router;
pub mod state;

pub use router::router;
pub use state::AppState;
