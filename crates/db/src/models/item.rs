//! Recyclable item catalog model.

use ecopoints_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `items` table.
///
/// `image` is the filename of a static asset, not a URL.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub title: String,
    pub image: String,
}
