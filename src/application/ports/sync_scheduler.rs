use async_trait::async_trait;

use crate::shared::error::Result;

/// Deferred-replay tag drained when the photo queue syncs on reconnect.
pub const SYNC_PHOTOS_TAG: &str = "sync-photos";
/// Recognized placeholder tag for generic offline data.
pub const SYNC_DATA_TAG: &str = "sync-data";

/// Platform-level background sync registration. Registration is best-effort:
/// enqueue operations succeed even when the capability is missing.
#[async_trait]
pub trait SyncScheduler: Send + Sync {
    async fn register(&self, tag: &str) -> Result<()>;
}
