use async_trait::async_trait;

use crate::domain::entities::Notification;
use crate::shared::error::Result;

#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn show(&self, notification: &Notification) -> Result<()>;
}

/// An open client window, as reported by the platform.
#[derive(Debug, Clone)]
pub struct ClientWindow {
    pub id: String,
    pub url: String,
}

/// Window enumeration and navigation used by notification-click handling.
#[async_trait]
pub trait ClientWindows: Send + Sync {
    async fn list(&self) -> Result<Vec<ClientWindow>>;

    async fn navigate_and_focus(&self, window_id: &str, url: &str) -> Result<()>;

    async fn open(&self, url: &str) -> Result<()>;
}
