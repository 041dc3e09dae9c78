// ============================================================================
// Portal Infrastructure - PostgreSQL Account Repository
// File: crates/portal-infrastructure/src/database/postgres/account_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;

use portal_core::domain::{AccountProfile, AccountStatus, PermissionSet};
use portal_core::error::DomainError;
use portal_core::repositories::AccountRepository;

pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct AccountProfileRow {
    pub status: Option<String>,
    pub permissions: Option<Vec<String>>,
}

impl From<AccountProfileRow> for AccountProfile {
    fn from(row: AccountProfileRow) -> Self {
        AccountProfile {
            status: row.status.as_deref().and_then(AccountStatus::parse),
            permissions: row
                .permissions
                .unwrap_or_default()
                .into_iter()
                .collect::<PermissionSet>(),
        }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_profile(&self, subject: &str) -> Result<Option<AccountProfile>, DomainError> {
        let row: Option<AccountProfileRow> = sqlx::query_as(
            r#"
            SELECT status, permissions
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(subject)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding account profile: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }
}
