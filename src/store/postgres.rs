//! PostgreSQL-backed options store.
//!
//! One table, `plugin_options`, holding every plugin record as JSONB keyed by
//! option name.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row};

use super::{OptionsStore, GLOBAL_OPTIONS_KEY};
use crate::error::AdminError;
use crate::options::DisplayOptions;

/// Options store backed by PostgreSQL.
pub struct PgOptionsStore {
    pool: PgPool,
}

impl PgOptionsStore {
    pub async fn new(db_url: &str) -> Result<Self, AdminError> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await
            .map_err(|e| AdminError::Database(format!("Failed to connect to PostgreSQL: {e}")))?;

        Ok(Self { pool })
    }

    /// Run schema migrations.
    pub async fn migrate(&self) -> Result<(), AdminError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS plugin_options (
                name        TEXT PRIMARY KEY,
                value       JSONB NOT NULL,
                updated_at  TIMESTAMPTZ DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Seed the global display-options record if it does not exist yet.
    /// Every embed location must have a position and a style before the first
    /// render.
    pub async fn ensure_defaults(&self) -> Result<(), AdminError> {
        let defaults = serde_json::to_value(DisplayOptions::default())?;

        sqlx::query(
            r#"
            INSERT INTO plugin_options (name, value)
            VALUES ($1, $2)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(GLOBAL_OPTIONS_KEY)
        .bind(&defaults)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl OptionsStore for PgOptionsStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, AdminError> {
        let row = sqlx::query("SELECT value FROM plugin_options WHERE name = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get::<Value, _>("value")))
    }

    async fn set(&self, key: &str, value: &Value) -> Result<(), AdminError> {
        sqlx::query(
            r#"
            INSERT INTO plugin_options (name, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (name)
            DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
