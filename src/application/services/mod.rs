pub mod image_compressor;
pub mod offline_service;
pub mod sync_service;

pub use offline_service::OfflineService;
pub use sync_service::{SyncReport, SyncService};
