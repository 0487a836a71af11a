//! Point service — registration, lookup, and filtered search.
//!
//! DESIGN
//! ======
//! A registration is one `points` row plus `point_items` join rows, written
//! in a single transaction so a failed join insert never leaves an orphan
//! point behind.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are reported before any database work starts and map
//! to 422 at the route layer; unknown item ids are detected inside the
//! transaction so the check and the insert see the same snapshot.

use shared::NewPoint;
use sqlx::{PgPool, QueryBuilder};

#[cfg(test)]
#[path = "point_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
pub enum PointError {
    #[error("invalid point: {0}")]
    Invalid(&'static str),
    #[error("unknown item id: {0}")]
    UnknownItem(i64),
    #[error("point not found: {0}")]
    NotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row from the `points` table.
#[derive(Debug, Clone)]
pub struct PointRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

/// Search filter for `GET /api/points`.
#[derive(Debug, Clone, Default)]
pub struct PointFilter {
    pub city: Option<String>,
    pub uf: Option<String>,
    /// Match points offering ANY of these item ids. Empty means no item filter.
    pub items: Vec<i32>,
}

/// Validate a registration payload without touching the database.
///
/// # Errors
///
/// Returns `PointError::Invalid` naming the first failing field.
pub fn validate_new_point(new_point: &NewPoint) -> Result<(), PointError> {
    if new_point.name.trim().is_empty() {
        return Err(PointError::Invalid("name must not be empty"));
    }
    if !is_plausible_email(&new_point.email) {
        return Err(PointError::Invalid("email is not valid"));
    }
    if new_point.whatsapp.trim().is_empty() {
        return Err(PointError::Invalid("whatsapp must not be empty"));
    }
    if !(-90.0..=90.0).contains(&new_point.latitude) {
        return Err(PointError::Invalid("latitude out of range"));
    }
    if !(-180.0..=180.0).contains(&new_point.longitude) {
        return Err(PointError::Invalid("longitude out of range"));
    }
    if new_point.city.trim().is_empty() {
        return Err(PointError::Invalid("city must not be empty"));
    }
    if new_point.uf.len() != 2 || !new_point.uf.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PointError::Invalid("uf must be a two-letter state code"));
    }
    if new_point.items.is_empty() {
        return Err(PointError::Invalid("select at least one item"));
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    let trimmed = email.trim();
    let parts = trimmed.split('@').collect::<Vec<_>>();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Convert payload item ids to database ids, deduplicating but preserving
/// first-seen order. Ids outside the i32 range cannot exist in `items`.
fn normalize_item_ids(ids: &[i64]) -> Result<Vec<i32>, PointError> {
    let mut out: Vec<i32> = Vec::with_capacity(ids.len());
    for &id in ids {
        let id = i32::try_from(id).map_err(|_| PointError::UnknownItem(id))?;
        if !out.contains(&id) {
            out.push(id);
        }
    }
    Ok(out)
}

/// Create a point and its item links in one transaction.
///
/// # Errors
///
/// Returns a validation error, `UnknownItem` for ids not present in `items`,
/// or a database error.
pub async fn create_point(pool: &PgPool, new_point: &NewPoint) -> Result<PointRow, PointError> {
    validate_new_point(new_point)?;
    let item_ids = normalize_item_ids(&new_point.items)?;

    let mut tx = pool.begin().await?;

    let known: Vec<i32> = sqlx::query_scalar("SELECT id FROM items WHERE id = ANY($1)")
        .bind(&item_ids)
        .fetch_all(&mut *tx)
        .await?;
    if let Some(missing) = item_ids.iter().find(|id| !known.contains(id)) {
        return Err(PointError::UnknownItem(i64::from(*missing)));
    }

    let id: i32 = sqlx::query_scalar(
        "INSERT INTO points (name, email, whatsapp, latitude, longitude, city, uf)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id",
    )
    .bind(new_point.name.trim())
    .bind(new_point.email.trim())
    .bind(new_point.whatsapp.trim())
    .bind(new_point.latitude)
    .bind(new_point.longitude)
    .bind(new_point.city.trim())
    .bind(new_point.uf.to_ascii_uppercase())
    .fetch_one(&mut *tx)
    .await?;

    let mut builder = QueryBuilder::new("INSERT INTO point_items (point_id, item_id) ");
    builder.push_values(&item_ids, |mut row, item_id| {
        row.push_bind(id).push_bind(item_id);
    });
    builder.build().execute(&mut *tx).await?;

    tx.commit().await?;

    Ok(PointRow {
        id,
        name: new_point.name.trim().to_owned(),
        email: new_point.email.trim().to_owned(),
        whatsapp: new_point.whatsapp.trim().to_owned(),
        latitude: new_point.latitude,
        longitude: new_point.longitude,
        city: new_point.city.trim().to_owned(),
        uf: new_point.uf.to_ascii_uppercase(),
    })
}

/// Fetch one point by id.
///
/// # Errors
///
/// Returns `NotFound` when no row exists, or a database error.
pub async fn get_point(pool: &PgPool, id: i64) -> Result<PointRow, PointError> {
    let db_id = i32::try_from(id).map_err(|_| PointError::NotFound(id))?;
    let row = sqlx::query_as::<_, (i32, String, String, String, f64, f64, String, String)>(
        "SELECT id, name, email, whatsapp, latitude, longitude, city, uf FROM points WHERE id = $1",
    )
    .bind(db_id)
    .fetch_optional(pool)
    .await?
    .ok_or(PointError::NotFound(id))?;

    Ok(row_to_point(row))
}

/// Search points by city, UF, and offered items.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn search_points(pool: &PgPool, filter: &PointFilter) -> Result<Vec<PointRow>, PointError> {
    let mut builder = QueryBuilder::new(
        "SELECT DISTINCT points.id, points.name, points.email, points.whatsapp,
                points.latitude, points.longitude, points.city, points.uf
         FROM points",
    );
    if !filter.items.is_empty() {
        builder.push(" JOIN point_items ON point_items.point_id = points.id");
    }

    let mut has_where = false;
    if let Some(uf) = &filter.uf {
        builder.push(" WHERE points.uf = ");
        builder.push_bind(uf.to_ascii_uppercase());
        has_where = true;
    }
    if let Some(city) = &filter.city {
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push("points.city = ");
        builder.push_bind(city);
        has_where = true;
    }
    if !filter.items.is_empty() {
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push("point_items.item_id IN (");
        {
            let mut separated = builder.separated(", ");
            for item_id in &filter.items {
                separated.push_bind(item_id);
            }
        }
        builder.push(")");
    }
    builder.push(" ORDER BY points.id ASC");

    let rows = builder
        .build_query_as::<(i32, String, String, String, f64, f64, String, String)>()
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(row_to_point).collect())
}

fn row_to_point(row: (i32, String, String, String, f64, f64, String, String)) -> PointRow {
    let (id, name, email, whatsapp, latitude, longitude, city, uf) = row;
    PointRow { id, name, email, whatsapp, latitude, longitude, city, uf }
}
