pub mod http_cache;
pub mod http_gateway;
pub mod notification;
pub mod offline_store;
pub mod sync_scheduler;

pub use http_cache::HttpCache;
pub use http_gateway::HttpGateway;
pub use notification::{ClientWindow, ClientWindows, NotificationSink};
pub use offline_store::OfflineStore;
pub use sync_scheduler::{SyncScheduler, SYNC_DATA_TAG, SYNC_PHOTOS_TAG};
