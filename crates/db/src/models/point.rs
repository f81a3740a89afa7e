//! Collection point models and DTOs.
//!
//! A point is linked to the items it accepts through the `point_items`
//! junction table. Points are only ever created, never updated or deleted.

use ecopoints_core::points::ItemIds;
use ecopoints_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `points` table.
///
/// `image` is the stored upload filename. Turning it into a public URL is
/// left to the HTTP layer.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Point {
    pub id: DbId,
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

/// Title of an item accepted by a point (projection of `items` via `point_items`).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct PointItemTitle {
    pub title: String,
}

/// A point together with the titles of every item it accepts.
#[derive(Debug, Clone, Serialize)]
pub struct PointWithItems {
    pub point: Point,
    pub items: Vec<PointItemTitle>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for registering a new collection point.
///
/// `image` must already reference a stored upload. `item_ids` is a validated,
/// non-empty set of distinct ids; whether those items exist is checked by the
/// database during the insert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePoint {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "whatsapp is required"))]
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "uf is required"))]
    pub uf: String,
    #[validate(length(min = 1, message = "image is required"))]
    pub image: String,
    pub item_ids: ItemIds,
}

/// Query parameters for `GET /points`.
///
/// `uf` and `city` are exact-match filters; a missing value behaves like an
/// empty string and matches nothing. `items` is the comma-joined id list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointListParams {
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub city: String,
    pub items: Option<String>,
}
