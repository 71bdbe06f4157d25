use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::application::ports::{HttpGateway, OfflineStore};
use crate::domain::entities::OfflinePhoto;
use crate::shared::config::SyncConfig;
use crate::shared::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub synced_count: u32,
    pub failed_count: u32,
    pub pending_count: u64,
}

/// Replays the durable offline queue against the upload API once
/// connectivity returns. Failed entries stay pending for the next trigger.
pub struct SyncService {
    store: Arc<dyn OfflineStore>,
    gateway: Arc<dyn HttpGateway>,
    upload_url: Url,
}

impl SyncService {
    pub fn new(
        store: Arc<dyn OfflineStore>,
        gateway: Arc<dyn HttpGateway>,
        config: &SyncConfig,
    ) -> Result<Self> {
        let upload_url = Url::parse(&config.upload_endpoint)
            .map_err(|e| AppError::ConfigurationError(format!("upload endpoint: {}", e)))?;
        Ok(Self {
            store,
            gateway,
            upload_url,
        })
    }

    /// Drains the pending-photo queue. Only a 2xx response counts as a
    /// successful upload; anything else leaves the record queued.
    pub async fn sync_pending_photos(&self) -> Result<SyncReport> {
        let pending = self.store.pending_photos().await?;
        debug!(count = pending.len(), "replaying pending photo uploads");

        let mut synced_count = 0;
        let mut failed_count = 0;

        for photo in &pending {
            match self.upload_photo(photo).await {
                Ok(()) => {
                    self.store.mark_photo_synced(&photo.id).await?;
                    synced_count += 1;
                }
                Err(e) => {
                    warn!(photo_id = %photo.id, "photo upload failed, keeping queued: {}", e);
                    failed_count += 1;
                }
            }
        }

        if synced_count > 0 {
            let pruned = self.store.prune_synced_photos().await?;
            debug!(pruned, "removed confirmed uploads from the queue");
        }

        let report = SyncReport {
            synced_count,
            failed_count,
            pending_count: self.store.pending_count().await?,
        };
        info!(
            synced = report.synced_count,
            failed = report.failed_count,
            pending = report.pending_count,
            "photo sync pass finished"
        );
        Ok(report)
    }

    /// Placeholder for the generic-data trigger: nothing is uploaded yet,
    /// the report only restates what is still queued.
    pub async fn sync_pending_data(&self) -> Result<SyncReport> {
        let pending = self.store.pending_data().await?;
        debug!(count = pending.len(), "generic data sync not implemented");
        Ok(SyncReport {
            synced_count: 0,
            failed_count: 0,
            pending_count: self.store.pending_count().await?,
        })
    }

    /// Periodic replay loop, for hosts without a platform sync trigger.
    pub fn schedule_replay(self: &Arc<Self>, interval_secs: u64) {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(tokio::time::Duration::from_secs(interval_secs));

            loop {
                interval.tick().await;

                if let Err(e) = service.sync_pending_photos().await {
                    tracing::error!("Scheduled photo sync failed: {}", e);
                }
            }
        });
    }

    async fn upload_photo(&self, photo: &OfflinePhoto) -> Result<()> {
        let payload = serde_json::json!({
            "id": photo.id,
            "projectId": photo.project_id,
            "stepId": photo.step_id,
            "category": photo.category,
            "description": photo.description,
            "fileName": photo.file_name,
            "fileType": photo.file_type,
            "createdAt": photo.created_at,
            "fileData": STANDARD.encode(&photo.file_data),
        });

        let response = self.gateway.post_json(&self.upload_url, &payload).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(AppError::Network(format!(
                "upload rejected with status {}",
                response.status
            )))
        }
    }
}
