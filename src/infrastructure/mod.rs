pub mod cache;
pub mod database;
pub mod network;
pub mod sync;
