//! Route definitions for the item catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// GET    /                         -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(items::list))
}
