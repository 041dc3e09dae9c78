// ============================================================================
// Portal Infrastructure - PostgreSQL Menu Display Settings Repository
// File: crates/portal-infrastructure/src/database/postgres/menu_display_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use portal_core::domain::{DisplayMode, MenuDisplaySettings};
use portal_core::error::DomainError;
use portal_core::repositories::MenuDisplaySettingsRepository;

/// Settings are global: the table has no seller column.
pub struct PgMenuDisplaySettingsRepository {
    pool: PgPool,
}

impl PgMenuDisplaySettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DisplaySettingRow {
    pub group_id: String,
    pub display_mode: String,
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl MenuDisplaySettingsRepository for PgMenuDisplaySettingsRepository {
    async fn load(&self) -> Result<MenuDisplaySettings, DomainError> {
        let rows: Vec<DisplaySettingRow> = sqlx::query_as(
            r#"
            SELECT group_id, display_mode
            FROM menu_display_settings
            ORDER BY group_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("loading menu display settings", e))?;

        Ok(rows
            .into_iter()
            .map(|row| (row.group_id, DisplayMode::from(row.display_mode)))
            .collect())
    }

    async fn save(&self, settings: &MenuDisplaySettings) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("starting transaction", e))?;

        sqlx::query("DELETE FROM menu_display_settings")
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("clearing menu display settings", e))?;

        let now = Utc::now();
        for (group_id, mode) in settings.iter() {
            sqlx::query(
                r#"
                INSERT INTO menu_display_settings (group_id, display_mode, updated_at)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(group_id)
            .bind(mode.as_str())
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("inserting menu display setting", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("committing menu display settings", e))?;

        info!("Persisted {} menu display settings", settings.len());
        Ok(())
    }
}
