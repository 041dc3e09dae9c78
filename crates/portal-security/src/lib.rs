//! # Portal Security
//!
//! Bearer token handling: JWT issue/decode and `Authorization` header parsing.

pub mod jwt;
pub mod bearer;

pub use jwt::{AccessClaims, JwtError, TokenService};
pub use bearer::bearer_token;
