use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3333`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for in-flight requests on shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Directory uploaded point photos are written to and served from.
    pub uploads_dir: PathBuf,
    /// Public base URL under which `uploads_dir` is reachable by clients.
    pub uploads_base_url: String,
    /// Directory holding the item catalog icons, served beneath `uploads_dir`
    /// under the same `/uploads` prefix.
    pub item_assets_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `3333`                           |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                             |
    /// | `UPLOADS_DIR`          | `uploads`                        |
    /// | `UPLOADS_BASE_URL`     | `http://localhost:3333/uploads`  |
    /// | `ITEM_ASSETS_DIR`      | `crates/api/assets/items`        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3333".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let uploads_dir = PathBuf::from(
            std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".into()),
        );

        let uploads_base_url = std::env::var("UPLOADS_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}/uploads"));

        let item_assets_dir = std::env::var("ITEM_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_item_assets_dir());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            uploads_dir,
            uploads_base_url,
            item_assets_dir,
        }
    }
}

/// The catalog icons shipped with this crate.
pub fn default_item_assets_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/items"))
}
