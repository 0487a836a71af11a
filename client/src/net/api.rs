//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch
//! failures degrade into visible form messages without crashing hydration.

#![allow(clippy::unused_async)]

use shared::{CityInfo, Item, NewPoint, PointDetail, StateInfo};

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
fn cities_endpoint(uf: &str) -> String {
    format!("/api/geo/states/{uf}/cities")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, what: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch the collectible item categories from `GET /api/items`.
///
/// # Errors
///
/// Returns an error string if the request fails or the status is non-OK.
pub async fn fetch_items() -> Result<Vec<Item>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/items", "items").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch all states from `GET /api/geo/states`.
///
/// # Errors
///
/// Returns an error string if the request fails or the status is non-OK.
pub async fn fetch_states() -> Result<Vec<StateInfo>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/geo/states", "states").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the cities of one state from `GET /api/geo/states/{uf}/cities`.
///
/// # Errors
///
/// Returns an error string if the request fails or the status is non-OK.
pub async fn fetch_cities(uf: &str) -> Result<Vec<CityInfo>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&cities_endpoint(uf), "cities").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = uf;
        Err("not available on server".to_owned())
    }
}

/// Submit a registration via `POST /api/points`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the
/// payload.
pub async fn create_point(point: &NewPoint) -> Result<PointDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/points")
            .json(point)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("registration", resp.status()));
        }
        resp.json::<PointDetail>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = point;
        Err("not available on server".to_owned())
    }
}
