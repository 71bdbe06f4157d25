use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Denormalized read-only copy of a project used to render the UI offline.
/// Replaced wholesale on every successful fresh fetch, never patched.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CachedProject {
    pub id: String,
    pub payload: String,
}

impl CachedProject {
    pub fn new(id: String, payload: &serde_json::Value) -> Self {
        Self {
            id,
            payload: payload.to_string(),
        }
    }

    pub fn payload_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.payload)
    }
}
