use serde::{Deserialize, Serialize};

/// Notification displayed for a received push event, after merging the
/// optional payload over the built-in template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub tag: String,
    pub require_interaction: bool,
    pub url: String,
    pub vibrate: Vec<u32>,
    pub actions: Vec<NotificationAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationAction {
    pub action: String,
    pub title: String,
}

/// Optional JSON shape carried by a push message. Any subset of fields
/// overrides the defaults; `data.url` sets the click target.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushPayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub icon: Option<String>,
    pub badge: Option<String>,
    pub tag: Option<String>,
    pub require_interaction: Option<bool>,
    #[serde(default)]
    pub data: Option<PushData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushData {
    pub url: Option<String>,
}
