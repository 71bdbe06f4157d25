//! Offline caching and synchronization core for the ArmorTrack
//! service-tracking application: the multi-strategy cache router, the
//! durable offline upload queue, and the image compression gate that makes
//! queued uploads viable on constrained bandwidth.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod worker;

pub use shared::config::AppConfig;
pub use shared::error::{AppError, Result};

pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "armortrack_offline=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
