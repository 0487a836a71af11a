//! Reference geography state: the state list and the per-UF city list.
//!
//! DESIGN
//! ======
//! City fetches race when the user flips through states quickly; responses
//! carry the UF they were requested for and are dropped if another UF has
//! been selected in the meantime.

use shared::{CityInfo, StateInfo};

#[cfg(test)]
#[path = "geo_test.rs"]
mod tests;

#[derive(Clone, Debug, Default)]
pub struct GeoState {
    pub states: Vec<StateInfo>,
    pub cities: Vec<CityInfo>,
    /// UF of the in-flight (or most recently completed) city fetch.
    pub pending_uf: Option<String>,
    pub loading_cities: bool,
    pub error: Option<String>,
}

impl GeoState {
    /// Start a city fetch for `uf`, clearing the stale city list.
    pub fn begin_cities_fetch(&mut self, uf: &str) {
        self.pending_uf = Some(uf.to_owned());
        self.cities.clear();
        self.loading_cities = true;
        self.error = None;
    }

    /// Apply a completed city fetch. Responses for a UF other than the one
    /// currently pending are stale and ignored.
    pub fn finish_cities_fetch(&mut self, uf: &str, result: Result<Vec<CityInfo>, String>) {
        if self.pending_uf.as_deref() != Some(uf) {
            return;
        }
        self.loading_cities = false;
        match result {
            Ok(cities) => self.cities = cities,
            Err(message) => self.error = Some(message),
        }
    }
}
