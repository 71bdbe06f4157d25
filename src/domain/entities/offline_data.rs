use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Generic envelope for any non-photo mutation that must survive offline.
/// Same `synced` lifecycle as the photo queue, opaque JSON payload instead
/// of binary file data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OfflineData {
    pub id: String,
    pub data_type: String,
    pub payload: String,
    pub created_at: i64,
    pub synced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineDataDraft {
    pub id: String,
    pub data_type: String,
    pub payload: serde_json::Value,
    pub created_at: i64,
}

impl OfflineDataDraft {
    pub fn new(id: String, data_type: String, payload: serde_json::Value) -> Self {
        Self {
            id,
            data_type,
            payload,
            created_at: Utc::now().timestamp(),
        }
    }
}
