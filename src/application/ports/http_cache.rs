use async_trait::async_trait;

use crate::domain::entities::HttpResponse;
use crate::shared::error::Result;

/// Named-bucket response cache, the router's view of the platform cache
/// storage. Buckets never mix entries from two cache-version generations;
/// rollover is handled by deleting whole buckets.
#[async_trait]
pub trait HttpCache: Send + Sync {
    async fn get(&self, bucket: &str, key: &str) -> Result<Option<HttpResponse>>;

    async fn put(&self, bucket: &str, key: &str, response: HttpResponse) -> Result<()>;

    /// Every bucket currently present, across all versions.
    async fn bucket_names(&self) -> Result<Vec<String>>;

    /// Returns true if the bucket existed.
    async fn delete_bucket(&self, bucket: &str) -> Result<bool>;

    async fn entry_count(&self, bucket: &str) -> Result<usize>;
}
