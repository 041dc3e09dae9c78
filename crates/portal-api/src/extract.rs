// ============================================================================
// Portal API - Session Extractor
// File: crates/portal-api/src/extract.rs
// ============================================================================
//! Resolves the bearer token of a request into a [`SessionState`].

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use std::convert::Infallible;

use portal_core::domain::{Role, Session, SessionState};
use portal_security::bearer_token;

use crate::error::ApiError;
use crate::state::AppState;

/// Session of the caller. Never rejects; a missing or bad token is anonymous.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionState);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token);

        Ok(CurrentSession(state.sessions.resolve(token).await))
    }
}

impl CurrentSession {
    /// A ready, authenticated session.
    pub fn authenticated(&self) -> Result<&Session, ApiError> {
        match &self.0 {
            SessionState::Loading => Err(ApiError::ServiceUnavailable(
                "Session is still loading".to_string(),
            )),
            SessionState::Ready(session) if session.is_authenticated() => Ok(session),
            SessionState::Ready(_) => Err(ApiError::Unauthorized(
                "Missing or invalid access token".to_string(),
            )),
        }
    }

    /// An authenticated admin or superadmin session.
    pub fn administrator(&self) -> Result<&Session, ApiError> {
        let session = self.authenticated()?;
        match &session.role {
            Some(role) if role.is_administrative() => Ok(session),
            _ => Err(ApiError::Forbidden(format!(
                "Role {} may not manage menu settings",
                session.role.as_ref().map(Role::as_str).unwrap_or("anonymous")
            ))),
        }
    }
}
