// ============================================================================
// Portal Infrastructure - Redis Mirror for Menu Display Settings
// File: crates/portal-infrastructure/src/cache/redis_cache.rs
// ============================================================================
//! Mirrors the display settings into Redis as one JSON value, without TTL.
//! Read failures fall back to the primary store. A write first drops the
//! mirrored value, so a failed mirror update never leaves the previous
//! mapping behind.

use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::{Config, Pool, Runtime};
use std::sync::Arc;
use tracing::{debug, warn};

use portal_core::domain::MenuDisplaySettings;
use portal_core::error::DomainError;
use portal_core::repositories::MenuDisplaySettingsRepository;
use portal_shared::constants::MENU_DISPLAY_SETTINGS_CACHE_KEY;

pub fn create_redis_pool(url: &str) -> Result<Pool, DomainError> {
    Config::from_url(url)
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| DomainError::CacheError(e.to_string()))
}

/// Key/value store holding the mirrored payload.
#[async_trait]
pub trait SettingsMirror: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, DomainError>;
    async fn write(&self, key: &str, payload: String) -> Result<(), DomainError>;
    async fn invalidate(&self, key: &str) -> Result<(), DomainError>;
}

pub struct RedisMirror {
    pool: Pool,
}

impl RedisMirror {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    async fn connection(&self) -> Result<deadpool_redis::Connection, DomainError> {
        self.pool
            .get()
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }
}

#[async_trait]
impl SettingsMirror for RedisMirror {
    async fn read(&self, key: &str) -> Result<Option<String>, DomainError> {
        let mut conn = self.connection().await?;
        conn.get(key)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }

    async fn write(&self, key: &str, payload: String) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(key, payload)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }

    async fn invalidate(&self, key: &str) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }
}

pub struct MirroredSettingsRepository<R: MenuDisplaySettingsRepository + ?Sized, M: SettingsMirror> {
    inner: Arc<R>,
    mirror: M,
    key: String,
}

impl<R: MenuDisplaySettingsRepository + ?Sized, M: SettingsMirror> MirroredSettingsRepository<R, M> {
    pub fn new(inner: Arc<R>, mirror: M) -> Self {
        Self {
            inner,
            mirror,
            key: MENU_DISPLAY_SETTINGS_CACHE_KEY.to_string(),
        }
    }

    async fn read_mirror(&self) -> Result<Option<MenuDisplaySettings>, DomainError> {
        let raw = self.mirror.read(&self.key).await?;
        raw.as_deref().map(decode).transpose()
    }

    async fn write_mirror(&self, settings: &MenuDisplaySettings) -> Result<(), DomainError> {
        self.mirror.write(&self.key, encode(settings)?).await
    }
}

fn encode(settings: &MenuDisplaySettings) -> Result<String, DomainError> {
    serde_json::to_string(settings).map_err(|e| DomainError::CacheError(e.to_string()))
}

fn decode(raw: &str) -> Result<MenuDisplaySettings, DomainError> {
    serde_json::from_str(raw).map_err(|e| DomainError::CacheError(e.to_string()))
}

#[async_trait]
impl<R: MenuDisplaySettingsRepository + ?Sized, M: SettingsMirror> MenuDisplaySettingsRepository
    for MirroredSettingsRepository<R, M>
{
    async fn load(&self) -> Result<MenuDisplaySettings, DomainError> {
        match self.read_mirror().await {
            Ok(Some(settings)) => {
                debug!("Menu display settings served from Redis");
                return Ok(settings);
            }
            Ok(None) => {}
            Err(e) => warn!("Redis mirror unavailable, reading primary store: {}", e),
        }

        let settings = self.inner.load().await?;
        if let Err(e) = self.write_mirror(&settings).await {
            warn!("Failed to mirror menu display settings: {}", e);
        }
        Ok(settings)
    }

    /// Fails without touching the primary store when the mirrored value
    /// cannot be dropped.
    async fn save(&self, settings: &MenuDisplaySettings) -> Result<(), DomainError> {
        self.mirror.invalidate(&self.key).await.map_err(|e| {
            warn!("Cannot invalidate mirrored menu display settings: {}", e);
            e
        })?;

        self.inner.save(settings).await?;

        if let Err(e) = self.write_mirror(settings).await {
            warn!("Failed to mirror menu display settings: {}", e);
            // A concurrent load may have written the old mapping back.
            if let Err(e) = self.mirror.invalidate(&self.key).await {
                warn!("Mirrored menu display settings may be stale: {}", e);
            }
        }
        Ok(())
    }
}
