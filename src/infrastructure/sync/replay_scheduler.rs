use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::application::ports::SyncScheduler;
use crate::shared::error::Result;

/// In-process deferred-replay registry. Tags accumulate while offline and
/// are taken in one batch by whatever watches connectivity.
#[derive(Default)]
pub struct InProcessReplayScheduler {
    tags: Arc<RwLock<HashSet<String>>>,
}

impl InProcessReplayScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn registered_tags(&self) -> Vec<String> {
        let tags = self.tags.read().await;
        tags.iter().cloned().collect()
    }

    /// Removes and returns all registered tags, to be replayed on reconnect.
    pub async fn take_tags(&self) -> Vec<String> {
        let mut tags = self.tags.write().await;
        tags.drain().collect()
    }
}

#[async_trait]
impl SyncScheduler for InProcessReplayScheduler {
    async fn register(&self, tag: &str) -> Result<()> {
        let mut tags = self.tags.write().await;
        if tags.insert(tag.to_string()) {
            debug!(tag, "deferred replay registered");
        }
        Ok(())
    }
}
