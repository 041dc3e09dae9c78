//! In-memory repositories for local development and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use portal_core::domain::{AccountProfile, MenuDisplaySettings};
use portal_core::error::DomainError;
use portal_core::repositories::{AccountRepository, MenuDisplaySettingsRepository};

#[derive(Default)]
pub struct InMemoryAccountRepository {
    profiles: RwLock<HashMap<String, AccountProfile>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, subject: &str, profile: AccountProfile) {
        self.profiles.write().await.insert(subject.to_string(), profile);
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_profile(&self, subject: &str) -> Result<Option<AccountProfile>, DomainError> {
        Ok(self.profiles.read().await.get(subject).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryMenuDisplaySettingsRepository {
    settings: RwLock<MenuDisplaySettings>,
}

impl InMemoryMenuDisplaySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: MenuDisplaySettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

#[async_trait]
impl MenuDisplaySettingsRepository for InMemoryMenuDisplaySettingsRepository {
    async fn load(&self) -> Result<MenuDisplaySettings, DomainError> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &MenuDisplaySettings) -> Result<(), DomainError> {
        debug!("Storing {} menu display settings in memory", settings.len());
        *self.settings.write().await = settings.clone();
        Ok(())
    }
}
