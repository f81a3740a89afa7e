//! Client-facing shapes for stored rows.
//!
//! Repositories return raw image filenames. These views add an `image_url`
//! built from the configured uploads base URL before anything is serialized.

use ecopoints_core::images::image_url;
use ecopoints_core::types::DbId;
use ecopoints_db::models::item::Item;
use ecopoints_db::models::point::{Point, PointItemTitle, PointWithItems};
use serde::Serialize;

/// A point with its derived public image URL.
#[derive(Debug, Clone, Serialize)]
pub struct PointView {
    #[serde(flatten)]
    pub point: Point,
    pub image_url: String,
}

impl PointView {
    pub fn new(point: Point, base_url: &str) -> Self {
        let image_url = image_url(base_url, &point.image);
        Self { point, image_url }
    }
}

/// Response body for a single point lookup.
#[derive(Debug, Clone, Serialize)]
pub struct PointDetailView {
    pub point: PointView,
    pub items: Vec<PointItemTitle>,
}

impl PointDetailView {
    pub fn new(found: PointWithItems, base_url: &str) -> Self {
        Self {
            point: PointView::new(found.point, base_url),
            items: found.items,
        }
    }
}

/// A catalog item as shown to clients: the asset filename is replaced by its URL.
#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub id: DbId,
    pub title: String,
    pub image_url: String,
}

impl ItemView {
    pub fn new(item: Item, base_url: &str) -> Self {
        Self {
            id: item.id,
            image_url: image_url(base_url, &item.image),
            title: item.title,
        }
    }
}
