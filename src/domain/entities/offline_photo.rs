use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A photo captured while disconnected, waiting in the durable upload queue.
///
/// `synced` starts false and is the only field ever mutated; a record is
/// otherwise immutable until it is pruned after a confirmed upload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OfflinePhoto {
    pub id: String,
    pub project_id: String,
    pub step_id: String,
    pub category: String,
    pub description: String,
    pub file_data: Vec<u8>,
    pub file_name: String,
    pub file_type: String,
    pub created_at: i64,
    pub synced: bool,
}

/// Caller-supplied fields of a photo about to enter the queue. The store
/// assigns `synced = false` on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflinePhotoDraft {
    pub id: String,
    pub project_id: String,
    pub step_id: String,
    pub category: String,
    pub description: String,
    pub file_data: Vec<u8>,
    pub file_name: String,
    pub file_type: String,
    pub created_at: i64,
}

impl OfflinePhotoDraft {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        project_id: String,
        step_id: String,
        category: String,
        description: String,
        file_data: Vec<u8>,
        file_name: String,
        file_type: String,
    ) -> Self {
        Self {
            id,
            project_id,
            step_id,
            category,
            description,
            file_data,
            file_name,
            file_type,
            created_at: Utc::now().timestamp(),
        }
    }
}
