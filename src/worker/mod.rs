pub mod classify;
pub mod push;
pub mod router;

pub use classify::{classify, RequestClass};
pub use router::CacheRouter;
