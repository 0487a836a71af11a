//! Geography proxy service — states and cities from the IBGE localities API.
//!
//! DESIGN
//! ======
//! The original frontend called IBGE directly from the browser. Here the
//! server proxies it so the client only ever talks to its own origin and the
//! (static) reference data can be cached in memory: the state list once, the
//! city list per UF. Cache entries never expire; IBGE locality data changes
//! on a census timescale.

use std::collections::HashMap;
use std::sync::Arc;

use shared::{CityInfo, StateInfo};
use tokio::sync::RwLock;

#[cfg(test)]
#[path = "geo_test.rs"]
mod tests;

const DEFAULT_IBGE_BASE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    #[error("geography upstream error: {0}")]
    Upstream(String),
    #[error("geography response decode error: {0}")]
    Decode(String),
}

/// Raw IBGE state record. Extra fields (id, regiao) are ignored.
#[derive(Debug, serde::Deserialize)]
struct IbgeState {
    sigla: String,
    nome: String,
}

/// Raw IBGE municipality record.
#[derive(Debug, serde::Deserialize)]
struct IbgeCity {
    nome: String,
}

#[derive(Default)]
struct GeoCache {
    states: Option<Vec<StateInfo>>,
    cities: HashMap<String, Vec<CityInfo>>,
}

/// Client for the IBGE localities API with an in-memory cache.
#[derive(Clone)]
pub struct GeoClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<RwLock<GeoCache>>,
}

impl GeoClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            cache: Arc::new(RwLock::new(GeoCache::default())),
        }
    }

    /// Build from `IBGE_BASE_URL`, falling back to the public IBGE endpoint.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("IBGE_BASE_URL").unwrap_or_else(|_| DEFAULT_IBGE_BASE_URL.to_owned());
        Self::new(&base_url)
    }

    /// List all states, sorted by name. Served from cache after first fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream request fails or cannot be decoded.
    pub async fn states(&self) -> Result<Vec<StateInfo>, GeoError> {
        {
            let cache = self.cache.read().await;
            if let Some(states) = &cache.states {
                return Ok(states.clone());
            }
        }

        let url = format!("{}/estados", self.base_url);
        let raw: Vec<IbgeState> = self.fetch_json(&url).await?;
        let states = states_from_ibge(raw);

        let mut cache = self.cache.write().await;
        cache.states = Some(states.clone());
        Ok(states)
    }

    /// List the cities of one state. `uf` must already be normalized
    /// (two uppercase ASCII letters). Cached per UF.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream request fails or cannot be decoded.
    pub async fn cities(&self, uf: &str) -> Result<Vec<CityInfo>, GeoError> {
        {
            let cache = self.cache.read().await;
            if let Some(cities) = cache.cities.get(uf) {
                return Ok(cities.clone());
            }
        }

        let url = format!("{}/estados/{uf}/municipios", self.base_url);
        let raw: Vec<IbgeCity> = self.fetch_json(&url).await?;
        let cities = cities_from_ibge(raw);

        let mut cache = self.cache.write().await;
        cache.cities.insert(uf.to_owned(), cities.clone());
        Ok(cities)
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, GeoError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GeoError::Upstream(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(GeoError::Upstream(format!("{status}: {body}")));
        }

        resp.json::<T>().await.map_err(|e| GeoError::Decode(e.to_string()))
    }
}

fn states_from_ibge(raw: Vec<IbgeState>) -> Vec<StateInfo> {
    let mut states = raw
        .into_iter()
        .map(|state| StateInfo { uf: state.sigla, name: state.nome })
        .collect::<Vec<_>>();
    states.sort_by(|a, b| a.name.cmp(&b.name));
    states
}

fn cities_from_ibge(raw: Vec<IbgeCity>) -> Vec<CityInfo> {
    raw.into_iter().map(|city| CityInfo { name: city.nome }).collect()
}
