//! Repository traits (ports)

pub mod account_repository;
pub mod menu_display_repository;

pub use account_repository::AccountRepository;
pub use menu_display_repository::MenuDisplaySettingsRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use menu_display_repository::MockMenuDisplaySettingsRepository;
