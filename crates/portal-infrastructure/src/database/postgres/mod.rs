//! PostgreSQL repository implementations

pub mod account_repo_impl;
pub mod menu_display_repo_impl;

pub use account_repo_impl::PgAccountRepository;
pub use menu_display_repo_impl::PgMenuDisplaySettingsRepository;
