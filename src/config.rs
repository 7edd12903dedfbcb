//! Server configuration, read from environment variables with defaults.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port for the HTTP listener (`RATEHUB_PORT`).
    pub port: u16,
    /// Directory for the sled rate store (`RATEHUB_DATA_DIR`).
    pub data_dir: PathBuf,
    /// Request body size cap in bytes (`RATEHUB_MAX_BODY_BYTES`).
    pub max_body_bytes: usize,
    /// Allowed CORS origins, comma-separated (`RATEHUB_CORS_ORIGINS`).
    /// Empty means no cross-origin access.
    pub cors_origins: Vec<String>,
    /// Dev mode (`RATEHUB_DEV=1`): permissive CORS.
    pub dev_mode: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            data_dir: PathBuf::from("ratehub_data"),
            max_body_bytes: 256 * 1024,
            cors_origins: Vec::new(),
            dev_mode: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let cors_origins = env::var("RATEHUB_CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            port: env::var("RATEHUB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            data_dir: env::var("RATEHUB_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            max_body_bytes: env::var("RATEHUB_MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
            cors_origins,
            dev_mode: env::var("RATEHUB_DEV").ok().as_deref() == Some("1"),
        }
    }
}
