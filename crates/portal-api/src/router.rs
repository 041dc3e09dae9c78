use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, navigation, settings};
use crate::state::AppState;

/// Every portal route with request tracing. CORS is layered by the binary.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/navigation/menu", get(navigation::menu))
        .route("/navigation/authorize", post(navigation::authorize))
        .route(
            "/settings/menu-display",
            get(settings::get_menu_display).put(settings::put_menu_display),
        )
        .route("/settings/menu-groups", get(settings::menu_groups));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use portal_core::domain::{AccountProfile, AccountStatus};
    use portal_core::repositories::{AccountRepository, MenuDisplaySettingsRepository};
    use portal_core::services::{MenuDisplayService, NavigationService, SessionService};
    use portal_core::{MenuCatalog, RouteTable};
    use portal_infrastructure::{InMemoryAccountRepository, InMemoryMenuDisplaySettingsRepository};
    use portal_security::TokenService;

    const SECRET: &str = "router-test-secret";

    async fn app() -> (Router, Arc<TokenService>) {
        let accounts = InMemoryAccountRepository::new();
        accounts
            .insert(
                "seller-1",
                AccountProfile {
                    status: Some(AccountStatus::Active),
                    permissions: ["product.all", "order.all"].into_iter().collect(),
                },
            )
            .await;
        accounts
            .insert(
                "seller-2",
                AccountProfile {
                    status: Some(AccountStatus::Pending),
                    permissions: ["dashboard.view"].into_iter().collect(),
                },
            )
            .await;
        let accounts: Arc<dyn AccountRepository> = Arc::new(accounts);
        let settings: Arc<dyn MenuDisplaySettingsRepository> =
            Arc::new(InMemoryMenuDisplaySettingsRepository::new());

        let tokens = Arc::new(TokenService::new(SECRET, 900, 0));
        let catalog = Arc::new(MenuCatalog::builtin().unwrap());
        let display = Arc::new(MenuDisplayService::new(settings, Arc::clone(&catalog)));
        let navigation = Arc::new(NavigationService::new(
            catalog,
            Arc::new(RouteTable::builtin()),
            display,
        ));
        let sessions = Arc::new(SessionService::new(accounts, Arc::clone(&tokens)));

        (router(AppState::new(sessions, navigation)), tokens)
    }

    fn bearer(tokens: &TokenService, subject: &str, role: &str) -> String {
        format!("Bearer {}", tokens.issue_access_token(subject, role).unwrap())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn get_with(uri: &str, auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn json_request(method: Method, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app().await;
        let (status, body) = send(app, get_with("/health", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_menu_requires_token() {
        let (app, _) = app().await;
        let (status, body) = send(app, get_with("/api/v1/navigation/menu", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_seller_menu_is_permission_filtered() {
        let (app, tokens) = app().await;
        let auth = bearer(&tokens, "seller-1", "seller");
        let (status, body) = send(app, get_with("/api/v1/navigation/menu", Some(&auth))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["role"], "seller");
        let titles: Vec<&str> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["title"].as_str().unwrap())
            .collect();
        assert!(titles.contains(&"Products"));
        assert!(titles.contains(&"Profile"));
        assert!(!titles.contains(&"Dashboard"));
    }

    #[tokio::test]
    async fn test_authorize_pending_seller_is_redirected() {
        let (app, tokens) = app().await;
        let auth = bearer(&tokens, "seller-2", "seller");
        let request = json_request(
            Method::POST,
            "/api/v1/navigation/authorize",
            Some(&auth),
            json!({ "path": "/seller/all-products" }),
        );
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["decision"]["outcome"], "redirect_to");
        assert_eq!(body["data"]["decision"]["path"], "/seller/account-pending");
    }

    #[tokio::test]
    async fn test_authorize_anonymous_goes_to_login() {
        let (app, _) = app().await;
        let request = json_request(
            Method::POST,
            "/api/v1/navigation/authorize",
            None,
            json!({ "path": "/admin/dashboard" }),
        );
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["decision"]["path"], "/login");
    }

    #[tokio::test]
    async fn test_authorize_unknown_path() {
        let (app, _) = app().await;
        let request = json_request(
            Method::POST,
            "/api/v1/navigation/authorize",
            None,
            json!({ "path": "/nowhere" }),
        );
        let (status, _) = send(app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_seller_cannot_update_display_settings() {
        let (app, tokens) = app().await;
        let auth = bearer(&tokens, "seller-1", "seller");
        let request = json_request(
            Method::PUT,
            "/api/v1/settings/menu-display",
            Some(&auth),
            json!({ "10": "flat" }),
        );
        let (status, _) = send(app, request).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_flattens_group_for_sellers() {
        let (app, tokens) = app().await;
        let admin = bearer(&tokens, "admin-1", "admin");
        let request = json_request(
            Method::PUT,
            "/api/v1/settings/menu-display",
            Some(&admin),
            json!({ "10": "flat" }),
        );
        let (status, body) = send(app.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["10"], "flat");

        let seller = bearer(&tokens, "seller-1", "seller");
        let (_, body) = send(app, get_with("/api/v1/navigation/menu", Some(&seller))).await;
        let titles: Vec<&str> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["title"].as_str().unwrap())
            .collect();
        assert!(titles.contains(&"All Products"));
        assert!(!titles.contains(&"Products"));
    }

    #[tokio::test]
    async fn test_unknown_group_is_unprocessable() {
        let (app, tokens) = app().await;
        let admin = bearer(&tokens, "admin-1", "superadmin");
        let request = json_request(
            Method::PUT,
            "/api/v1/settings/menu-display",
            Some(&admin),
            json!({ "999": "flat" }),
        );
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE");
    }

    #[tokio::test]
    async fn test_padded_group_key_is_unprocessable() {
        let (app, tokens) = app().await;
        let admin = bearer(&tokens, "admin-1", "admin");
        let request = json_request(
            Method::PUT,
            "/api/v1/settings/menu-display",
            Some(&admin),
            json!({ "+10": "flat" }),
        );
        let (status, _) = send(app, request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_menu_groups_for_admin() {
        let (app, tokens) = app().await;
        let admin = bearer(&tokens, "admin-1", "admin");
        let (status, body) =
            send(app, get_with("/api/v1/settings/menu-groups", Some(&admin))).await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<u64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|group| group["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![4, 6, 7, 10, 30, 40, 50]);
        assert_eq!(body["data"][3]["mode"], "grouped");
    }
}
