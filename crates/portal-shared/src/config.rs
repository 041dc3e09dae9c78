//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub redis: RedisSettings,
    pub jwt: JwtSettings,
    pub storage: StorageSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub cors_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub run_migrations: bool,
}

/// Redis mirror for the menu display settings. Disabled when `url` is unset.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RedisSettings {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_token_expiry: i64,
    /// Seconds of clock skew tolerated when checking `exp`.
    pub leeway: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub backend: StorageBackend,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub format: LogFormat,
    #[serde(default)]
    pub directory: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    /// Builder pre-populated with every default except `jwt.secret`.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "portal-server")?
            .set_default("app.cors_origin", "http://localhost:5173")?
            .set_default("database.url", "postgres://localhost/portal")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.run_migrations", false)?
            .set_default(
                "jwt.access_token_expiry",
                crate::constants::DEFAULT_ACCESS_TOKEN_EXPIRY,
            )?
            .set_default("jwt.leeway", crate::constants::DEFAULT_TOKEN_LEEWAY)?
            .set_default("storage.backend", "postgres")?
            .set_default("log.format", "json")
    }

    pub fn is_production(&self) -> bool {
        self.app.env == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize_with_secret() {
        let config: AppConfig = AppConfig::defaults()
            .unwrap()
            .set_override("jwt.secret", "test-secret")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.app.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(config.log.format, LogFormat::Json);
        assert!(config.redis.url.is_none());
        assert!(config.log.directory.is_none());
        assert!(!config.is_production());
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let result = AppConfig::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn test_memory_backend_override() {
        let config: AppConfig = AppConfig::defaults()
            .unwrap()
            .set_override("jwt.secret", "s")
            .unwrap()
            .set_override("storage.backend", "memory")
            .unwrap()
            .set_override("redis.url", "redis://127.0.0.1:6379")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.redis.url.as_deref(), Some("redis://127.0.0.1:6379"));
    }
}
