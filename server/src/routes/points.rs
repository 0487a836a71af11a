//! Point routes — registration, lookup, and filtered search.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use shared::{NewPoint, PointDetail, PointSummary};

use crate::services::item;
use crate::services::point::{self, PointError, PointFilter, PointRow};
use crate::state::AppState;

#[cfg(test)]
#[path = "points_test.rs"]
mod tests;

#[derive(Deserialize)]
pub struct PointsQuery {
    pub city: Option<String>,
    pub uf: Option<String>,
    /// Comma-separated item ids, e.g. `items=1,2,6`.
    pub items: Option<String>,
}

/// Parse the `items` query parameter. Blank and non-numeric entries are
/// skipped rather than failing the whole request.
pub(crate) fn parse_items_filter(raw: &str) -> Vec<i32> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<i32>().ok())
        .collect()
}

fn to_summary(row: PointRow) -> PointSummary {
    PointSummary {
        id: i64::from(row.id),
        name: row.name,
        email: row.email,
        whatsapp: row.whatsapp,
        latitude: row.latitude,
        longitude: row.longitude,
        city: row.city,
        uf: row.uf,
    }
}

async fn to_detail(state: &AppState, row: PointRow) -> Result<PointDetail, StatusCode> {
    let items = item::list_point_items(&state.pool, row.id)
        .await
        .map_err(super::items::item_error_to_status)?;

    let base = state.assets.public_base_url.as_str();
    Ok(PointDetail {
        point: to_summary(row),
        items: items
            .into_iter()
            .map(|item_row| super::items::to_response(base, item_row))
            .collect(),
    })
}

/// `POST /api/points` — register a collection point.
pub async fn create_point(
    State(state): State<AppState>,
    Json(body): Json<NewPoint>,
) -> Result<(StatusCode, Json<PointDetail>), StatusCode> {
    let row = point::create_point(&state.pool, &body)
        .await
        .map_err(point_error_to_status)?;

    tracing::info!(point_id = row.id, city = %row.city, uf = %row.uf, "collection point registered");

    let detail = to_detail(&state, row).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// `GET /api/points/:id` — fetch one point with its items.
pub async fn get_point(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PointDetail>, StatusCode> {
    let row = point::get_point(&state.pool, id)
        .await
        .map_err(point_error_to_status)?;
    Ok(Json(to_detail(&state, row).await?))
}

/// `GET /api/points?city=&uf=&items=1,2` — filtered search.
pub async fn list_points(
    State(state): State<AppState>,
    Query(query): Query<PointsQuery>,
) -> Result<Json<Vec<PointSummary>>, StatusCode> {
    let filter = PointFilter {
        city: query.city.filter(|city| !city.trim().is_empty()),
        uf: query.uf.filter(|uf| !uf.trim().is_empty()),
        items: query.items.as_deref().map(parse_items_filter).unwrap_or_default(),
    };

    let rows = point::search_points(&state.pool, &filter)
        .await
        .map_err(point_error_to_status)?;
    Ok(Json(rows.into_iter().map(to_summary).collect()))
}

pub(crate) fn point_error_to_status(err: PointError) -> StatusCode {
    match err {
        PointError::Invalid(_) | PointError::UnknownItem(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PointError::NotFound(_) => StatusCode::NOT_FOUND,
        PointError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
