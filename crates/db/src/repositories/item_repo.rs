//! Repository for the `items` catalog.

use sqlx::PgPool;

use crate::models::item::Item;

/// Column list for `items` queries.
const COLUMNS: &str = "id, title, image";

/// Read access to the seeded item catalog.
pub struct ItemRepo;

impl ItemRepo {
    /// List every catalog item, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY id");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Number of rows in the catalog; zero means the seed migration never ran.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
