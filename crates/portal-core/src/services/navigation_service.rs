// ============================================================================
// Portal Core - Navigation Service
// File: crates/portal-core/src/services/navigation_service.rs
// ============================================================================
//! Sidebar and route decisions for a resolved session.

use std::sync::Arc;
use tracing::debug;

use crate::catalog::MenuCatalog;
use crate::domain::{AccessDecision, MenuEntry, Session, SessionState};
use crate::error::DomainError;
use crate::repositories::MenuDisplaySettingsRepository;
use crate::routes::RouteTable;
use crate::services::menu_display_service::MenuDisplayService;
use crate::services::menu_resolver::resolve_menu;

pub struct NavigationService<R: MenuDisplaySettingsRepository + ?Sized> {
    catalog: Arc<MenuCatalog>,
    routes: Arc<RouteTable>,
    display: Arc<MenuDisplayService<R>>,
}

impl<R: MenuDisplaySettingsRepository + ?Sized> NavigationService<R> {
    pub fn new(
        catalog: Arc<MenuCatalog>,
        routes: Arc<RouteTable>,
        display: Arc<MenuDisplayService<R>>,
    ) -> Self {
        Self {
            catalog,
            routes,
            display,
        }
    }

    /// Sidebar for `session`. Unauthenticated sessions get an empty menu.
    pub async fn menu_for(&self, session: &Session) -> Result<Vec<MenuEntry>, DomainError> {
        let Some(role) = &session.role else {
            return Ok(Vec::new());
        };
        let settings = self.display.current().await?;
        let menu = resolve_menu(self.catalog.entries(), role, &session.permissions, &settings);
        debug!("Resolved {} menu entries for role {}", menu.len(), role);
        Ok(menu)
    }

    /// Decision for a declared route; `None` for an unknown path.
    pub fn authorize_path(&self, path: &str, session: &SessionState) -> Option<AccessDecision> {
        self.routes.authorize_path(path, session)
    }

    pub fn display(&self) -> &Arc<MenuDisplayService<R>> {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountStatus, DisplayMode, MenuDisplaySettings, MenuId, Role};
    use crate::repositories::MockMenuDisplaySettingsRepository;

    fn service(settings: MenuDisplaySettings) -> NavigationService<MockMenuDisplaySettingsRepository> {
        let mut repo = MockMenuDisplaySettingsRepository::new();
        repo.expect_load().returning(move || Ok(settings.clone()));
        let catalog = Arc::new(MenuCatalog::builtin().unwrap());
        let display = Arc::new(MenuDisplayService::new(Arc::new(repo), Arc::clone(&catalog)));
        NavigationService::new(catalog, Arc::new(RouteTable::builtin()), display)
    }

    #[tokio::test]
    async fn test_seller_menu_uses_display_settings() {
        let service = service(MenuDisplaySettings::new().with(10, DisplayMode::Flat));
        let session = Session::new(Role::Seller)
            .with_status(AccountStatus::Active)
            .with_permissions(["product.all"]);

        let menu = service.menu_for(&session).await.unwrap();
        let ids: Vec<u32> = menu.iter().map(|e| e.id.0).collect();
        // All Products spliced in place of the Products group, then Profile.
        assert_eq!(ids, vec![12, 22]);
        assert_eq!(menu[0].id, MenuId(12));
    }

    #[tokio::test]
    async fn test_anonymous_menu_is_empty() {
        let service = service(MenuDisplaySettings::new());
        assert!(service.menu_for(&Session::anonymous()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_authorize_path() {
        let service = service(MenuDisplaySettings::new());
        let session: SessionState = Session::new(Role::HireUser)
            .with_status(AccountStatus::Inactive)
            .into();
        assert_eq!(
            service.authorize_path("/hire/jobs", &session),
            Some(AccessDecision::redirect("/hire/account-inactive"))
        );
        assert_eq!(service.authorize_path("/hire/unknown", &session), None);
    }
}
