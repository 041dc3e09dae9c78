//! Account profile repository trait (port)

use async_trait::async_trait;
use crate::domain::AccountProfile;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Status and permissions for the token subject, if the account exists.
    async fn find_profile(&self, subject: &str) -> Result<Option<AccountProfile>, DomainError>;
}
