use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

use crate::application::ports::OfflineStore;
use crate::domain::entities::{
    CachedProject, OfflineData, OfflineDataDraft, OfflinePhoto, OfflinePhotoDraft,
};
use crate::shared::error::Result;

/// SQLx-backed offline store. Each operation acquires a connection from the
/// pool and commits independently; no atomicity is promised across calls.
pub struct SqliteOfflineStore {
    pool: Pool<Sqlite>,
}

impl SqliteOfflineStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfflineStore for SqliteOfflineStore {
    async fn queue_photo(&self, draft: OfflinePhotoDraft) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO offline_photos (
                id, project_id, step_id, category, description,
                file_data, file_name, file_type, created_at, synced
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 0)
            "#,
        )
        .bind(&draft.id)
        .bind(&draft.project_id)
        .bind(&draft.step_id)
        .bind(&draft.category)
        .bind(&draft.description)
        .bind(&draft.file_data)
        .bind(&draft.file_name)
        .bind(&draft.file_type)
        .bind(draft.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn pending_photos(&self) -> Result<Vec<OfflinePhoto>> {
        let photos = sqlx::query_as::<_, OfflinePhoto>(
            "SELECT * FROM offline_photos WHERE synced = 0",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(photos)
    }

    async fn mark_photo_synced(&self, id: &str) -> Result<()> {
        // UPDATE on an absent id affects zero rows, which is the intended
        // no-op.
        sqlx::query("UPDATE offline_photos SET synced = 1 WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn prune_synced_photos(&self) -> Result<u32> {
        let result = sqlx::query("DELETE FROM offline_photos WHERE synced = 1")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() as u32)
    }

    async fn cache_projects(&self, projects: Vec<CachedProject>) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM cached_projects")
            .execute(&mut *tx)
            .await?;

        for project in &projects {
            sqlx::query("INSERT INTO cached_projects (id, payload) VALUES (?1, ?2)")
                .bind(&project.id)
                .bind(&project.payload)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn cached_projects(&self) -> Result<Vec<CachedProject>> {
        let projects = sqlx::query_as::<_, CachedProject>("SELECT * FROM cached_projects")
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    async fn queue_data(&self, draft: OfflineDataDraft) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO offline_data (id, data_type, payload, created_at, synced)
            VALUES (?1, ?2, ?3, ?4, 0)
            "#,
        )
        .bind(&draft.id)
        .bind(&draft.data_type)
        .bind(draft.payload.to_string())
        .bind(draft.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn pending_data(&self) -> Result<Vec<OfflineData>> {
        let data = sqlx::query_as::<_, OfflineData>("SELECT * FROM offline_data WHERE synced = 0")
            .fetch_all(&self.pool)
            .await?;

        Ok(data)
    }

    async fn pending_count(&self) -> Result<u64> {
        let photos: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM offline_photos WHERE synced = 0")
                .fetch_one(&self.pool)
                .await?;

        let data: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM offline_data WHERE synced = 0")
            .fetch_one(&self.pool)
            .await?;

        Ok((photos + data) as u64)
    }
}
