use async_trait::async_trait;

use crate::domain::entities::{
    CachedProject, OfflineData, OfflineDataDraft, OfflinePhoto, OfflinePhotoDraft,
};
use crate::shared::error::Result;

/// Durable local store backing the offline queue and the project snapshot
/// cache. Every operation is independently fallible; callers must not assume
/// atomicity across calls.
#[async_trait]
pub trait OfflineStore: Send + Sync {
    /// Persists a photo with `synced = false`.
    async fn queue_photo(&self, draft: OfflinePhotoDraft) -> Result<()>;

    /// All photos still waiting for upload, from any prior session.
    async fn pending_photos(&self) -> Result<Vec<OfflinePhoto>>;

    /// Flips `synced` to true in place. No-op for an unknown id.
    async fn mark_photo_synced(&self, id: &str) -> Result<()>;

    /// Deletes rows already confirmed uploaded. Returns the number removed.
    async fn prune_synced_photos(&self) -> Result<u32>;

    /// Full snapshot replace: existing entries are cleared before the new
    /// set is written. Never a merge.
    async fn cache_projects(&self, projects: Vec<CachedProject>) -> Result<()>;

    async fn cached_projects(&self) -> Result<Vec<CachedProject>>;

    /// Persists a generic mutation envelope with `synced = false`.
    async fn queue_data(&self, draft: OfflineDataDraft) -> Result<()>;

    async fn pending_data(&self) -> Result<Vec<OfflineData>>;

    /// Pending photos plus pending generic data.
    async fn pending_count(&self) -> Result<u64>;
}
