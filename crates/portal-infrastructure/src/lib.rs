//! # Portal Infrastructure
//!
//! Database, cache and in-memory implementations of the core repository
//! ports (adapters).

pub mod database;
pub mod cache;
pub mod memory;

pub use database::{create_pool, run_migrations, PgAccountRepository, PgMenuDisplaySettingsRepository};
pub use cache::{create_redis_pool, MirroredSettingsRepository, RedisMirror, SettingsMirror};
pub use memory::{InMemoryAccountRepository, InMemoryMenuDisplaySettingsRepository};
