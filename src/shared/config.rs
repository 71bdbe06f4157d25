use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub sync: SyncConfig,
    pub compression: CompressionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

/// Configuration for the service-worker cache router. Bucket names embed the
/// cache version so that a deployment rollover never reuses an old bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub name_prefix: String,
    pub version: String,
    /// Origin the application shell is served from.
    pub app_origin: String,
    /// Shell assets guaranteed present in the static bucket after install.
    pub static_assets: Vec<String>,
    /// Substring matched against request hosts to detect remote-API traffic.
    pub api_host_fragment: String,
    /// Hosts whose responses are treated as static font/style assets.
    pub font_hosts: Vec<String>,
    /// Timeout for the network-first API strategy, in milliseconds.
    pub api_timeout_ms: u64,
    /// Document served as the offline fallback for navigations.
    pub shell_path: String,
    /// Default click target for push notifications.
    pub dashboard_path: String,
}

impl CacheConfig {
    pub fn static_bucket(&self) -> String {
        format!("{}-static-{}", self.name_prefix, self.version)
    }

    pub fn image_bucket(&self) -> String {
        format!("{}-images-{}", self.name_prefix, self.version)
    }

    pub fn api_bucket(&self) -> String {
        format!("{}-api-{}", self.name_prefix, self.version)
    }

    /// Buckets that survive an activation of this version.
    pub fn known_buckets(&self) -> Vec<String> {
        vec![
            self.static_bucket(),
            self.image_bucket(),
            self.api_bucket(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Endpoint the replay routine posts queued photos to.
    pub upload_endpoint: String,
    pub auto_sync: bool,
    pub sync_interval: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: f32,
    pub max_size_kb: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:data/armortrack-offline.db".to_string(),
                max_connections: 5,
                connection_timeout: 30,
            },
            cache: CacheConfig {
                name_prefix: "armortrack".to_string(),
                version: "v3".to_string(),
                app_origin: "https://app.armortrack.example".to_string(),
                static_assets: vec![
                    "/".to_string(),
                    "/index.html".to_string(),
                    "/manifest.json".to_string(),
                    "/icons/logo-192x192.png".to_string(),
                ],
                api_host_fragment: "supabase.co".to_string(),
                font_hosts: vec![
                    "fonts.googleapis.com".to_string(),
                    "fonts.gstatic.com".to_string(),
                ],
                api_timeout_ms: 5000,
                shell_path: "/index.html".to_string(),
                dashboard_path: "/dashboard".to_string(),
            },
            sync: SyncConfig {
                upload_endpoint: "https://app.armortrack.example/api/photos/upload".to_string(),
                auto_sync: true,
                sync_interval: 300, // 5 minutes
            },
            compression: CompressionConfig {
                max_width: 1920,
                max_height: 1920,
                quality: 0.8,
                max_size_kb: 500,
            },
        }
    }
}
