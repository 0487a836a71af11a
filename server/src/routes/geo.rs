//! Geography proxy routes — states and per-UF city lists.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use shared::{CityInfo, StateInfo};

use crate::services::geo::GeoError;
use crate::state::AppState;

#[cfg(test)]
#[path = "geo_test.rs"]
mod tests;

/// Normalize a UF path segment to two uppercase ASCII letters.
/// Returns `None` for anything else, which maps to 400.
pub(crate) fn normalize_uf(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

/// `GET /api/geo/states` — all states, sorted by name.
pub async fn list_states(State(state): State<AppState>) -> Result<Json<Vec<StateInfo>>, StatusCode> {
    let states = state.geo.states().await.map_err(geo_error_to_status)?;
    Ok(Json(states))
}

/// `GET /api/geo/states/:uf/cities` — cities of one state.
pub async fn list_cities(
    State(state): State<AppState>,
    Path(uf): Path<String>,
) -> Result<Json<Vec<CityInfo>>, StatusCode> {
    let uf = normalize_uf(&uf).ok_or(StatusCode::BAD_REQUEST)?;
    let cities = state.geo.cities(&uf).await.map_err(geo_error_to_status)?;
    Ok(Json(cities))
}

pub(crate) fn geo_error_to_status(err: GeoError) -> StatusCode {
    tracing::warn!(error = %err, "geography upstream failure");
    match err {
        GeoError::Upstream(_) | GeoError::Decode(_) => StatusCode::BAD_GATEWAY,
    }
}
