pub mod connection;
pub mod sqlite_offline_store;

pub use connection::{connect, ensure_schema};
pub use sqlite_offline_store::SqliteOfflineStore;
