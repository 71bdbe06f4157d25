use tracing::debug;

use crate::domain::entities::{Notification, NotificationAction, PushPayload};

/// Built-in template shown when a push carries no (or partial) payload.
pub fn default_notification(dashboard_path: &str) -> Notification {
    Notification {
        title: "ArmorTrack".to_string(),
        body: "You have a new update".to_string(),
        icon: "/icons/icon-192x192.png".to_string(),
        badge: "/icons/icon-72x72.png".to_string(),
        tag: "armortrack-notification".to_string(),
        require_interaction: true,
        url: dashboard_path.to_string(),
        vibrate: vec![200, 100, 200],
        actions: vec![
            NotificationAction {
                action: "open".to_string(),
                title: "Open".to_string(),
            },
            NotificationAction {
                action: "close".to_string(),
                title: "Close".to_string(),
            },
        ],
    }
}

/// Merges an optional push payload over the defaults. A payload that is not
/// valid JSON is degraded to plain text and used as the body.
pub fn build_notification(defaults: Notification, payload: Option<&[u8]>) -> Notification {
    let Some(raw) = payload else {
        return defaults;
    };

    match serde_json::from_slice::<PushPayload>(raw) {
        Ok(parsed) => merge(defaults, parsed),
        Err(e) => {
            debug!("push payload is not JSON, using raw text body: {}", e);
            Notification {
                body: String::from_utf8_lossy(raw).into_owned(),
                ..defaults
            }
        }
    }
}

fn merge(defaults: Notification, payload: PushPayload) -> Notification {
    Notification {
        title: payload.title.unwrap_or(defaults.title),
        body: payload.body.unwrap_or(defaults.body),
        icon: payload.icon.unwrap_or(defaults.icon),
        badge: payload.badge.unwrap_or(defaults.badge),
        tag: payload.tag.unwrap_or(defaults.tag),
        require_interaction: payload
            .require_interaction
            .unwrap_or(defaults.require_interaction),
        url: payload
            .data
            .and_then(|d| d.url)
            .unwrap_or(defaults.url),
        vibrate: defaults.vibrate,
        actions: defaults.actions,
    }
}
