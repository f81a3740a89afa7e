//! Repository for the `points` and `point_items` tables.
//!
//! Registration writes a point and all of its item associations in one
//! transaction. Queries resolve a point with its item titles, or filter
//! points by region and accepted items.

use ecopoints_core::points::ItemIds;
use ecopoints_core::types::DbId;
use sqlx::PgPool;

use crate::models::point::{CreatePoint, Point, PointItemTitle, PointWithItems};

/// Column list for the `points` table.
const COLUMNS: &str = "id, image, name, email, whatsapp, latitude, longitude, city, uf";

/// Same columns, qualified with the `p` alias for JOIN/EXISTS queries.
const QUALIFIED_COLUMNS: &str =
    "p.id, p.image, p.name, p.email, p.whatsapp, p.latitude, p.longitude, p.city, p.uf";

/// Provides creation and lookup of collection points.
pub struct PointRepo;

impl PointRepo {
    /// Insert a new point and one `point_items` row per requested item.
    ///
    /// Runs in a single transaction. If any insert fails (for example an item
    /// id that is not in the catalog trips the foreign key), the transaction
    /// is dropped without commit and rolls back, so neither the point nor any
    /// of its associations become visible.
    pub async fn create(pool: &PgPool, input: &CreatePoint) -> Result<Point, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO points \
                (image, name, email, whatsapp, latitude, longitude, city, uf) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        let point = sqlx::query_as::<_, Point>(&insert_query)
            .bind(&input.image)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.whatsapp)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.city)
            .bind(&input.uf)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_items_inner(&mut tx, point.id, &input.item_ids).await?;

        tx.commit().await?;
        Ok(point)
    }

    /// Find a point by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Point>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM points WHERE id = $1");
        sqlx::query_as::<_, Point>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a point by ID, enriched with the titles of the items it accepts.
    ///
    /// Returns `None` if no point with the given ID exists. Item order is
    /// unspecified.
    pub async fn find_by_id_with_items(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PointWithItems>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(point) => {
                let items = Self::get_item_titles(pool, point.id).await?;
                Ok(Some(PointWithItems { point, items }))
            }
            None => Ok(None),
        }
    }

    /// List points in `uf`/`city` that accept at least one of `item_ids`.
    ///
    /// Both region filters are exact, case-sensitive matches. Each point
    /// appears once no matter how many requested items it accepts. Order is
    /// unspecified.
    pub async fn list_filtered(
        pool: &PgPool,
        uf: &str,
        city: &str,
        item_ids: &ItemIds,
    ) -> Result<Vec<Point>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} \
             FROM points p \
             WHERE p.uf = $1 \
               AND p.city = $2 \
               AND EXISTS ( \
                   SELECT 1 FROM point_items pi \
                   WHERE pi.point_id = p.id AND pi.item_id = ANY($3) \
               )"
        );
        sqlx::query_as::<_, Point>(&query)
            .bind(uf)
            .bind(city)
            .bind(item_ids.as_slice())
            .fetch_all(pool)
            .await
    }

    /// Get the titles of all items associated with a point.
    pub async fn get_item_titles(
        pool: &PgPool,
        point_id: DbId,
    ) -> Result<Vec<PointItemTitle>, sqlx::Error> {
        sqlx::query_as::<_, PointItemTitle>(
            "SELECT i.title \
             FROM items i \
             JOIN point_items pi ON pi.item_id = i.id \
             WHERE pi.point_id = $1",
        )
        .bind(point_id)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Insert item associations within an existing transaction.
    async fn insert_items_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        point_id: DbId,
        item_ids: &ItemIds,
    ) -> Result<(), sqlx::Error> {
        for &item_id in item_ids.as_slice() {
            sqlx::query("INSERT INTO point_items (point_id, item_id) VALUES ($1, $2)")
                .bind(point_id)
                .bind(item_id)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}
