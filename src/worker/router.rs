use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures::future::join_all;
use tracing::{debug, info, warn};
use url::Url;

use crate::application::ports::sync_scheduler::{SYNC_DATA_TAG, SYNC_PHOTOS_TAG};
use crate::application::ports::{ClientWindows, HttpCache, HttpGateway, NotificationSink};
use crate::application::services::{SyncReport, SyncService};
use crate::domain::entities::{HttpRequest, HttpResponse, Notification};
use crate::shared::config::CacheConfig;
use crate::shared::error::Result;
use crate::worker::classify::{classify, RequestClass};
use crate::worker::push;

/// Routes every intercepted fetch through one of the caching strategies and
/// owns the cache-version lifecycle. All platform access goes through the
/// injected `HttpCache`/`HttpGateway` capabilities, so the strategy logic
/// runs unchanged under test.
pub struct CacheRouter {
    config: CacheConfig,
    cache: Arc<dyn HttpCache>,
    gateway: Arc<dyn HttpGateway>,
}

impl CacheRouter {
    pub fn new(
        config: CacheConfig,
        cache: Arc<dyn HttpCache>,
        gateway: Arc<dyn HttpGateway>,
    ) -> Self {
        Self {
            config,
            cache,
            gateway,
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Install phase: pre-populate the static bucket with the shell
    /// allow-list. Fails if any shell asset cannot be fetched.
    pub async fn handle_install(&self) -> Result<()> {
        let origin = Url::parse(&self.config.app_origin)?;
        let bucket = self.config.static_bucket();

        let fetches = self
            .config
            .static_assets
            .iter()
            .map(|path| {
                let origin = origin.clone();
                let bucket = bucket.clone();
                async move {
                    let url = origin.join(path)?;
                    let request = HttpRequest::get(url.as_str())?;
                    let response = self.gateway.fetch(&request).await?;
                    self.cache.put(&bucket, &request.cache_key(), response).await
                }
            })
            .collect::<Vec<_>>();

        for result in join_all(fetches).await {
            result?;
        }

        info!(
            bucket = %bucket,
            assets = self.config.static_assets.len(),
            "static shell cached"
        );
        Ok(())
    }

    /// Activate phase: delete every bucket that does not belong to the
    /// current version. Returns the number of buckets removed.
    pub async fn handle_activate(&self) -> Result<u32> {
        let known = self.config.known_buckets();
        let stale: Vec<String> = self
            .cache
            .bucket_names()
            .await?
            .into_iter()
            .filter(|name| !known.contains(name))
            .collect();

        let deletions = stale.iter().map(|name| self.cache.delete_bucket(name));
        for result in join_all(deletions).await {
            result?;
        }

        if !stale.is_empty() {
            info!(removed = ?stale, "old cache generations deleted");
        }
        Ok(stale.len() as u32)
    }

    pub async fn handle_fetch(&self, request: &HttpRequest) -> Result<HttpResponse> {
        match classify(request, &self.config) {
            RequestClass::Passthrough => self.gateway.fetch(request).await,
            RequestClass::Api => self.network_first_api(request).await,
            RequestClass::Image => self.cache_first(&self.config.image_bucket(), request).await,
            RequestClass::StaticAsset => {
                self.cache_first(&self.config.static_bucket(), request).await
            }
            RequestClass::Navigation => self.navigate_with_shell_fallback(request).await,
            RequestClass::Script => self.stale_while_revalidate(request).await,
        }
    }

    /// Network-first with timeout: API data must be fresh when possible but
    /// degrade gracefully offline.
    async fn network_first_api(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let bucket = self.config.api_bucket();
        let key = request.cache_key();
        let timeout = Duration::from_millis(self.config.api_timeout_ms);

        match tokio::time::timeout(timeout, self.gateway.fetch(request)).await {
            Ok(Ok(response)) => {
                if response.is_success() {
                    self.cache.put(&bucket, &key, response.clone()).await?;
                }
                Ok(response)
            }
            Ok(Err(e)) => {
                warn!(url = %request.url, "API fetch failed, trying cache: {}", e);
                self.api_fallback(&bucket, &key).await
            }
            Err(_) => {
                warn!(url = %request.url, timeout_ms = self.config.api_timeout_ms, "API fetch timed out");
                self.api_fallback(&bucket, &key).await
            }
        }
    }

    async fn api_fallback(&self, bucket: &str, key: &str) -> Result<HttpResponse> {
        match self.cache.get(bucket, key).await? {
            Some(cached) => Ok(cached),
            None => Ok(HttpResponse::offline_fallback()),
        }
    }

    /// Cache-first: visual assets rarely change and are expensive to refetch.
    async fn cache_first(&self, bucket: &str, request: &HttpRequest) -> Result<HttpResponse> {
        let key = request.cache_key();

        if let Some(cached) = self.cache.get(bucket, &key).await? {
            return Ok(cached);
        }

        match self.gateway.fetch(request).await {
            Ok(response) => {
                if response.is_success() {
                    self.cache.put(bucket, &key, response.clone()).await?;
                }
                Ok(response)
            }
            Err(e) => {
                debug!(url = %request.url, "asset fetch failed with no cached copy: {}", e);
                Ok(HttpResponse::empty(408))
            }
        }
    }

    /// Navigations must never hard-fail offline: fall back to the cached
    /// application shell so client-side routing keeps working.
    async fn navigate_with_shell_fallback(&self, request: &HttpRequest) -> Result<HttpResponse> {
        match self.gateway.fetch(request).await {
            Ok(response) => Ok(response),
            Err(e) => {
                debug!(url = %request.url, "navigation failed, serving shell: {}", e);
                let shell_url = Url::parse(&self.config.app_origin)?.join(&self.config.shell_path)?;
                match self
                    .cache
                    .get(&self.config.static_bucket(), shell_url.as_str())
                    .await?
                {
                    Some(shell) => Ok(shell),
                    None => Ok(HttpResponse::new(
                        503,
                        vec![("content-type".to_string(), "text/plain".to_string())],
                        Bytes::from_static(b"Offline"),
                    )),
                }
            }
        }
    }

    /// Stale-while-revalidate: return the cached copy immediately and
    /// refresh it in the background. No ordering guarantee between the two;
    /// a caller may only see the fresh copy on the next request.
    async fn stale_while_revalidate(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let bucket = self.config.static_bucket();
        let key = request.cache_key();

        if let Some(cached) = self.cache.get(&bucket, &key).await? {
            let cache = Arc::clone(&self.cache);
            let gateway = Arc::clone(&self.gateway);
            let request = request.clone();
            tokio::spawn(async move {
                match gateway.fetch(&request).await {
                    Ok(response) if response.is_success() => {
                        if let Err(e) = cache.put(&bucket, &key, response).await {
                            debug!("background revalidation store failed: {}", e);
                        }
                    }
                    Ok(response) => {
                        debug!(status = response.status, "background revalidation skipped");
                    }
                    Err(e) => debug!("background revalidation failed: {}", e),
                }
            });
            return Ok(cached);
        }

        let response = self.gateway.fetch(request).await?;
        if response.is_success() {
            self.cache.put(&bucket, &key, response.clone()).await?;
        }
        Ok(response)
    }

    /// Push event: merge the payload over the template and display it.
    pub async fn handle_push(
        &self,
        payload: Option<&[u8]>,
        sink: &dyn NotificationSink,
    ) -> Result<Notification> {
        let notification = push::build_notification(
            push::default_notification(&self.config.dashboard_path),
            payload,
        );
        sink.show(&notification).await?;
        Ok(notification)
    }

    /// Notification click: the close action only dismisses; otherwise reuse
    /// an open app window when one exists, else open a new one.
    pub async fn handle_notification_click(
        &self,
        action: &str,
        target_url: Option<&str>,
        windows: &dyn ClientWindows,
    ) -> Result<()> {
        if action == "close" {
            return Ok(());
        }

        let target = target_url.unwrap_or(&self.config.dashboard_path);

        for window in windows.list().await? {
            if window.url.contains(&self.config.app_origin) {
                return windows.navigate_and_focus(&window.id, target).await;
            }
        }
        windows.open(target).await
    }

    /// Sync event dispatch. Unknown tags are ignored, matching platform
    /// behavior for unregistered triggers.
    pub async fn handle_sync(&self, tag: &str, sync: &SyncService) -> Result<Option<SyncReport>> {
        match tag {
            SYNC_PHOTOS_TAG => sync.sync_pending_photos().await.map(Some),
            SYNC_DATA_TAG => sync.sync_pending_data().await.map(Some),
            other => {
                debug!(tag = other, "ignoring unknown sync tag");
                Ok(None)
            }
        }
    }
}
