// ============================================================================
// Portal API - Navigation Handlers
// File: crates/portal-api/src/handlers/navigation.rs
// ============================================================================
//! Sidebar menu and route authorization for the calling session.

use axum::{extract::State, Json};
use tracing::debug;
use validator::Validate;

use crate::dto::{AuthorizeRequest, AuthorizeResponse, MenuResponse};
use crate::error::ApiError;
use crate::extract::CurrentSession;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Resolved sidebar - GET /api/v1/navigation/menu
pub async fn menu(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<Json<ApiResponse<MenuResponse>>, ApiError> {
    let session = current.authenticated()?;
    let items = state.navigation.menu_for(session).await?;

    Ok(Json(ApiResponse::success(MenuResponse {
        role: session.role.clone(),
        items,
    })))
}

/// Route decision - POST /api/v1/navigation/authorize
///
/// Anonymous and loading sessions are answered too; the decision itself
/// says whether to redirect or wait.
pub async fn authorize(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<AuthorizeRequest>,
) -> Result<Json<ApiResponse<AuthorizeResponse>>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let decision = state
        .navigation
        .authorize_path(&payload.path, &session)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown route {}", payload.path)))?;
    debug!("Route {} -> {:?}", payload.path, decision);

    Ok(Json(ApiResponse::success(AuthorizeResponse {
        path: payload.path,
        decision,
    })))
}
