// ============================================================================
// Portal API - Menu Display Settings Handlers
// File: crates/portal-api/src/handlers/settings.rs
// ============================================================================

use axum::{extract::State, Json};
use tracing::info;

use portal_core::domain::MenuDisplaySettings;
use portal_core::services::MenuGroupSummary;

use crate::error::ApiError;
use crate::extract::CurrentSession;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Current mapping - GET /api/v1/settings/menu-display
pub async fn get_menu_display(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<Json<ApiResponse<MenuDisplaySettings>>, ApiError> {
    current.authenticated()?;
    let settings = state.display().current().await?;
    Ok(Json(ApiResponse::success(settings.as_ref().clone())))
}

/// Replace mapping - PUT /api/v1/settings/menu-display
pub async fn put_menu_display(
    State(state): State<AppState>,
    current: CurrentSession,
    Json(payload): Json<MenuDisplaySettings>,
) -> Result<Json<ApiResponse<MenuDisplaySettings>>, ApiError> {
    let session = current.administrator()?;
    let settings = state.display().update(payload).await?;
    info!(
        "Menu display settings replaced by {}",
        session.role.as_ref().map(|r| r.as_str()).unwrap_or_default()
    );
    Ok(Json(ApiResponse::success(settings.as_ref().clone())))
}

/// Configurable groups - GET /api/v1/settings/menu-groups
pub async fn menu_groups(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<Json<ApiResponse<Vec<MenuGroupSummary>>>, ApiError> {
    current.administrator()?;
    let groups = state.display().menu_groups().await?;
    Ok(Json(ApiResponse::success(groups)))
}
