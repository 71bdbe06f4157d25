use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tracing::info;

use crate::shared::config::DatabaseConfig;
use crate::shared::error::Result;

pub async fn connect(config: &DatabaseConfig) -> Result<Pool<Sqlite>> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout))
        .connect(&config.url)
        .await?;

    info!(url = %config.url, "offline database connected");
    Ok(pool)
}

/// Idempotent schema bootstrap: safe to re-run on an already-initialized
/// store.
pub async fn ensure_schema(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS offline_photos (
            id TEXT PRIMARY KEY,
            project_id TEXT NOT NULL,
            step_id TEXT NOT NULL,
            category TEXT NOT NULL,
            description TEXT NOT NULL,
            file_data BLOB NOT NULL,
            file_name TEXT NOT NULL,
            file_type TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            synced INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_offline_photos_project ON offline_photos(project_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_offline_photos_synced ON offline_photos(synced)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS offline_data (
            id TEXT PRIMARY KEY,
            data_type TEXT NOT NULL,
            payload TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            synced INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_offline_data_type ON offline_data(data_type)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_offline_data_synced ON offline_data(synced)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cached_projects (
            id TEXT PRIMARY KEY,
            payload TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
