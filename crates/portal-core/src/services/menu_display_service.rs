// ============================================================================
// Portal Core - Menu Display Service
// File: crates/portal-core/src/services/menu_display_service.rs
// ============================================================================
//! Fetch-once snapshot of the global menu display settings, refreshed after
//! an admin saves new settings.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::catalog::MenuCatalog;
use crate::domain::{DisplayMode, MenuDisplaySettings, MenuId, Role};
use crate::error::DomainError;
use crate::repositories::MenuDisplaySettingsRepository;

/// A configurable menu group and its current mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuGroupSummary {
    pub id: MenuId,
    pub title: String,
    pub role: Option<Role>,
    pub mode: DisplayMode,
}

pub struct MenuDisplayService<R: MenuDisplaySettingsRepository + ?Sized> {
    repo: Arc<R>,
    catalog: Arc<MenuCatalog>,
    snapshot: RwLock<Option<Arc<MenuDisplaySettings>>>,
}

impl<R: MenuDisplaySettingsRepository + ?Sized> MenuDisplayService<R> {
    pub fn new(repo: Arc<R>, catalog: Arc<MenuCatalog>) -> Self {
        Self {
            repo,
            catalog,
            snapshot: RwLock::new(None),
        }
    }

    /// Cached settings, fetched from the repository on first use.
    pub async fn current(&self) -> Result<Arc<MenuDisplaySettings>, DomainError> {
        if let Some(settings) = self.snapshot.read().await.as_ref() {
            return Ok(Arc::clone(settings));
        }

        let mut snapshot = self.snapshot.write().await;
        if let Some(settings) = snapshot.as_ref() {
            return Ok(Arc::clone(settings));
        }
        let settings = Arc::new(self.repo.load().await?);
        debug!("Loaded {} menu display settings", settings.len());
        *snapshot = Some(Arc::clone(&settings));
        Ok(settings)
    }

    /// Drops the snapshot and fetches again.
    pub async fn refresh(&self) -> Result<Arc<MenuDisplaySettings>, DomainError> {
        let mut snapshot = self.snapshot.write().await;
        let settings = Arc::new(self.repo.load().await?);
        *snapshot = Some(Arc::clone(&settings));
        Ok(settings)
    }

    /// Replaces the mapping. Every key must name a group of the catalog.
    pub async fn update(
        &self,
        settings: MenuDisplaySettings,
    ) -> Result<Arc<MenuDisplaySettings>, DomainError> {
        if let Some((key, _)) = settings
            .iter()
            .find(|(key, _)| self.catalog.find_group_by_key(key).is_none())
        {
            warn!("Rejected display settings for unknown group {}", key);
            return Err(DomainError::UnknownMenuGroup(key.to_string()));
        }

        self.repo.save(&settings).await?;
        info!("Menu display settings updated ({} groups)", settings.len());
        self.refresh().await
    }

    /// Catalog groups with their current mode, in catalog order.
    pub async fn menu_groups(&self) -> Result<Vec<MenuGroupSummary>, DomainError> {
        let settings = self.current().await?;
        Ok(self
            .catalog
            .groups()
            .map(|group| MenuGroupSummary {
                id: group.id,
                title: group.title.clone(),
                role: group.role.clone(),
                mode: settings.mode_for(group.id),
            })
            .collect())
    }
}
