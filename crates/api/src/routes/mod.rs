pub mod health;
pub mod items;
pub mod points;

use axum::Router;

use crate::state::AppState;

/// Build the public route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                                           list catalog
///
/// /points                                          list (filtered), create (multipart)
/// /points/{id}                                     get with item titles
/// ```
///
/// `/health` and the static `/uploads` directory are mounted separately by
/// the router builder.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", items::router())
        .nest("/points", points::router())
}
