//! Readiness report: the registry is usable only when the database answers
//! and the item catalog has been seeded.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use ecopoints_db::repositories::ItemRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, `degraded` (no catalog) or `unavailable` (no database).
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Items available for tagging points.
    pub catalog_items: i64,
}

/// GET /health
///
/// 200 when points can be registered, 503 otherwise.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (db_healthy, catalog_items) = match ItemRepo::count(&state.pool).await {
        Ok(count) => (true, count),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            (false, 0)
        }
    };

    let (code, status) = match (db_healthy, catalog_items) {
        (false, _) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
        (true, 0) => (StatusCode::SERVICE_UNAVAILABLE, "degraded"),
        (true, _) => (StatusCode::OK, "ok"),
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            catalog_items,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
