//! Item service — read-only access to the seeded collectible categories.

use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row from the `items` table.
#[derive(Debug, Clone)]
pub struct ItemRow {
    pub id: i32,
    pub image: String,
    pub title: String,
}

/// List all items in seed order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_items(pool: &PgPool) -> Result<Vec<ItemRow>, ItemError> {
    let rows = sqlx::query_as::<_, (i32, String, String)>("SELECT id, image, title FROM items ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, image, title)| ItemRow { id, image, title })
        .collect())
}

/// Fetch the items attached to one point, in id order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_point_items(pool: &PgPool, point_id: i32) -> Result<Vec<ItemRow>, ItemError> {
    let rows = sqlx::query_as::<_, (i32, String, String)>(
        "SELECT items.id, items.image, items.title
         FROM items
         JOIN point_items ON point_items.item_id = items.id
         WHERE point_items.point_id = $1
         ORDER BY items.id ASC",
    )
    .bind(point_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, image, title)| ItemRow { id, image, title })
        .collect())
}
