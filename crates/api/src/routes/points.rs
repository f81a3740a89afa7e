//! Route definitions for collection points.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use ecopoints_core::uploads::MAX_IMAGE_BYTES;

use crate::handlers::points;
use crate::state::AppState;

/// Headroom over the photo limit for the text fields and multipart framing.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes mounted at `/points`.
///
/// ```text
/// GET    /                         -> list
/// POST   /                         -> create (multipart)
/// GET    /{id}                     -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(points::list).post(points::create))
        .route("/{id}", get(points::get_by_id))
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + FORM_OVERHEAD_BYTES))
}
