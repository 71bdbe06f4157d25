use async_trait::async_trait;
use url::Url;

use crate::domain::entities::{HttpRequest, HttpResponse};
use crate::shared::error::Result;

/// Outbound network access for the cache router and the sync replay routine.
#[async_trait]
pub trait HttpGateway: Send + Sync {
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse>;

    async fn post_json(&self, url: &Url, body: &serde_json::Value) -> Result<HttpResponse>;
}
