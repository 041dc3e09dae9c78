//! Cache module (Redis adapters)

pub mod redis_cache;

pub use redis_cache::{create_redis_pool, MirroredSettingsRepository, RedisMirror, SettingsMirror};
