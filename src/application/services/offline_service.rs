use std::sync::Arc;

use tracing::warn;

use crate::application::ports::sync_scheduler::{SYNC_DATA_TAG, SYNC_PHOTOS_TAG};
use crate::application::ports::{OfflineStore, SyncScheduler};
use crate::domain::entities::{CachedProject, OfflineDataDraft, OfflinePhoto, OfflinePhotoDraft};
use crate::shared::error::Result;

/// Front door of the offline queue: persists captures durably and then
/// best-effort asks the platform to replay them once connectivity returns.
pub struct OfflineService {
    store: Arc<dyn OfflineStore>,
    scheduler: Arc<dyn SyncScheduler>,
}

impl OfflineService {
    pub fn new(store: Arc<dyn OfflineStore>, scheduler: Arc<dyn SyncScheduler>) -> Self {
        Self { store, scheduler }
    }

    /// Queues a photo for upload. The write is the guarantee; the replay
    /// registration is best-effort and never fails the enqueue.
    pub async fn queue_photo(&self, draft: OfflinePhotoDraft) -> Result<()> {
        self.store.queue_photo(draft).await?;

        if let Err(e) = self.scheduler.register(SYNC_PHOTOS_TAG).await {
            warn!("Background sync registration unavailable: {}", e);
        }

        Ok(())
    }

    pub async fn pending_photos(&self) -> Result<Vec<OfflinePhoto>> {
        self.store.pending_photos().await
    }

    pub async fn mark_photo_synced(&self, id: &str) -> Result<()> {
        self.store.mark_photo_synced(id).await
    }

    /// Replaces the cached project snapshot wholesale.
    pub async fn cache_projects(&self, projects: Vec<CachedProject>) -> Result<()> {
        self.store.cache_projects(projects).await
    }

    pub async fn cached_projects(&self) -> Result<Vec<CachedProject>> {
        self.store.cached_projects().await
    }

    pub async fn queue_data(&self, draft: OfflineDataDraft) -> Result<()> {
        self.store.queue_data(draft).await?;

        if let Err(e) = self.scheduler.register(SYNC_DATA_TAG).await {
            warn!("Background sync registration unavailable: {}", e);
        }

        Ok(())
    }

    pub async fn pending_count(&self) -> Result<u64> {
        self.store.pending_count().await
    }
}
