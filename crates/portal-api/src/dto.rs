//! Request and response payloads

use serde::{Deserialize, Serialize};
use validator::Validate;

use portal_core::domain::{AccessDecision, MenuEntry, Role};

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub role: Option<Role>,
    pub items: Vec<MenuEntry>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AuthorizeRequest {
    #[validate(length(min = 1, max = 255))]
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct AuthorizeResponse {
    pub path: String,
    pub decision: AccessDecision,
}
