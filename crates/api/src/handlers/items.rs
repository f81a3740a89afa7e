//! Handlers for the `/items` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use ecopoints_db::repositories::ItemRepo;

use crate::error::AppResult;
use crate::presentation::ItemView;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /items
///
/// List the recyclable item catalog with public image URLs.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let base_url = &state.config.uploads_base_url;
    let items: Vec<ItemView> = ItemRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|item| ItemView::new(item, base_url))
        .collect();
    Ok(Json(DataResponse { data: items }))
}
