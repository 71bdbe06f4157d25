pub mod memory_http_cache;

pub use memory_http_cache::MemoryHttpCache;
