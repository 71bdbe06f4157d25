use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::HttpCache;
use crate::domain::entities::HttpResponse;
use crate::shared::error::Result;

/// In-memory bucketed response cache. Buckets spring into existence on
/// first write and disappear wholesale at version rollover.
#[derive(Default)]
pub struct MemoryHttpCache {
    buckets: Arc<RwLock<HashMap<String, HashMap<String, HttpResponse>>>>,
}

impl MemoryHttpCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpCache for MemoryHttpCache {
    async fn get(&self, bucket: &str, key: &str) -> Result<Option<HttpResponse>> {
        let buckets = self.buckets.read().await;
        Ok(buckets.get(bucket).and_then(|b| b.get(key)).cloned())
    }

    async fn put(&self, bucket: &str, key: &str, response: HttpResponse) -> Result<()> {
        let mut buckets = self.buckets.write().await;
        buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), response);
        Ok(())
    }

    async fn bucket_names(&self) -> Result<Vec<String>> {
        let buckets = self.buckets.read().await;
        Ok(buckets.keys().cloned().collect())
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<bool> {
        let mut buckets = self.buckets.write().await;
        Ok(buckets.remove(bucket).is_some())
    }

    async fn entry_count(&self, bucket: &str) -> Result<usize> {
        let buckets = self.buckets.read().await;
        Ok(buckets.get(bucket).map(|b| b.len()).unwrap_or(0))
    }
}
