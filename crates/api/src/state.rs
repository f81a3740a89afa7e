use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the only handle to storage; nothing is kept in globals.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ecopoints_db::DbPool,
    /// Server configuration (uploads location and public base URL).
    pub config: Arc<ServerConfig>,
}
