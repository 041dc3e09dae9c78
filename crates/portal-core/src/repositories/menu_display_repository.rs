//! Menu display settings repository trait (port)

use async_trait::async_trait;
use crate::domain::MenuDisplaySettings;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuDisplaySettingsRepository: Send + Sync {
    async fn load(&self) -> Result<MenuDisplaySettings, DomainError>;

    /// Replaces the whole mapping.
    async fn save(&self, settings: &MenuDisplaySettings) -> Result<(), DomainError>;
}
