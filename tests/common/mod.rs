#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU16, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use url::Url;

use armortrack_offline::application::ports::{
    ClientWindow, ClientWindows, HttpGateway, NotificationSink, SyncScheduler,
};
use armortrack_offline::domain::entities::{HttpRequest, HttpResponse, Notification};
use armortrack_offline::shared::error::{AppError, Result};

/// Scripted network: routes keyed by URL, switchable into offline mode,
/// with an optional artificial latency for timeout tests.
pub struct MockGateway {
    responses: Mutex<HashMap<String, HttpResponse>>,
    offline: AtomicBool,
    delay: Mutex<Option<Duration>>,
    pub fetch_calls: AtomicUsize,
    pub posts: Mutex<Vec<serde_json::Value>>,
    pub post_status: AtomicU16,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            offline: AtomicBool::new(false),
            delay: Mutex::new(None),
            fetch_calls: AtomicUsize::new(0),
            posts: Mutex::new(Vec::new()),
            post_status: AtomicU16::new(200),
        }
    }

    pub async fn respond_with(&self, url: &str, response: HttpResponse) {
        let key = Url::parse(url).unwrap().to_string();
        self.responses.lock().await.insert(key, response);
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock().await = delay;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpGateway for MockGateway {
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = *self.delay.lock().await {
            tokio::time::sleep(delay).await;
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Network("connection refused".to_string()));
        }

        self.responses
            .lock()
            .await
            .get(request.url.as_str())
            .cloned()
            .ok_or_else(|| AppError::Network(format!("no route for {}", request.url)))
    }

    async fn post_json(&self, _url: &Url, body: &serde_json::Value) -> Result<HttpResponse> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Network("connection refused".to_string()));
        }

        self.posts.lock().await.push(body.clone());
        Ok(HttpResponse::empty(self.post_status.load(Ordering::SeqCst)))
    }
}

/// Records registered replay tags.
#[derive(Default)]
pub struct RecordingScheduler {
    pub tags: Mutex<Vec<String>>,
}

#[async_trait]
impl SyncScheduler for RecordingScheduler {
    async fn register(&self, tag: &str) -> Result<()> {
        self.tags.lock().await.push(tag.to_string());
        Ok(())
    }
}

/// Simulates a platform without background sync support.
pub struct UnsupportedScheduler;

#[async_trait]
impl SyncScheduler for UnsupportedScheduler {
    async fn register(&self, _tag: &str) -> Result<()> {
        Err(AppError::Internal("SyncManager not available".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub shown: Mutex<Vec<Notification>>,
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn show(&self, notification: &Notification) -> Result<()> {
        self.shown.lock().await.push(notification.clone());
        Ok(())
    }
}

/// Fixed window list plus a log of navigations and opens.
#[derive(Default)]
pub struct RecordingWindows {
    pub windows: Vec<ClientWindow>,
    pub navigations: Mutex<Vec<(String, String)>>,
    pub opened: Mutex<Vec<String>>,
}

impl RecordingWindows {
    pub fn with_windows(windows: Vec<ClientWindow>) -> Self {
        Self {
            windows,
            ..Self::default()
        }
    }
}

#[async_trait]
impl ClientWindows for RecordingWindows {
    async fn list(&self) -> Result<Vec<ClientWindow>> {
        Ok(self.windows.clone())
    }

    async fn navigate_and_focus(&self, window_id: &str, url: &str) -> Result<()> {
        self.navigations
            .lock()
            .await
            .push((window_id.to_string(), url.to_string()));
        Ok(())
    }

    async fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().await.push(url.to_string());
        Ok(())
    }
}
