//! Shared REST payload types for the collection point registration app.
//!
//! This crate owns the JSON contract used by both `server` and `client`:
//! reference data (`Item`, `StateInfo`, `CityInfo`), the registration payload
//! (`NewPoint`), and the point views returned by the API.

use serde::{Deserialize, Serialize};


/// A collectible item category. Static reference data seeded by migration;
/// the frontend only ever reads these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    /// Absolute URL of the item's icon, composed by the server from its
    /// configured public base and the stored image filename.
    pub image_url: String,
}

/// A Brazilian state (UF) from the geography proxy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateInfo {
    /// Two-letter state abbreviation, e.g. `SC`.
    pub uf: String,
    pub name: String,
}

/// A city within a state from the geography proxy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityInfo {
    pub name: String,
}

/// Payload for `POST /api/points` — one registration submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPoint {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    /// Selected item category ids. Must be non-empty.
    pub items: Vec<i64>,
}

/// A point row as returned by the search endpoint (no item expansion).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

/// A point with its collectible item categories expanded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointDetail {
    #[serde(flatten)]
    pub point: PointSummary,
    pub items: Vec<Item>,
}
