//! Item routes — the read-only reference data behind the selection grid.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use shared::Item;

use crate::services::item::{self, ItemError, ItemRow};
use crate::state::AppState;

#[cfg(test)]
#[path = "items_test.rs"]
mod tests;

/// Compose the public URL for an item's icon from the stored filename.
pub(crate) fn item_image_url(base: &str, image: &str) -> String {
    format!("{}/uploads/{image}", base.trim_end_matches('/'))
}

pub(crate) fn to_response(base: &str, row: ItemRow) -> Item {
    Item {
        id: i64::from(row.id),
        title: row.title,
        image_url: item_image_url(base, &row.image),
    }
}

/// `GET /api/items` — list all collectible item categories.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, StatusCode> {
    let rows = item::list_items(&state.pool)
        .await
        .map_err(item_error_to_status)?;

    let base = state.assets.public_base_url.as_str();
    Ok(Json(rows.into_iter().map(|row| to_response(base, row)).collect()))
}

pub(crate) fn item_error_to_status(err: ItemError) -> StatusCode {
    match err {
        ItemError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
