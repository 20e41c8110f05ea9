//! Portal configuration.
//!
//! Loaded once from a JSON file at process start and read-only thereafter.
//! Every field has a default, so an empty object (or no file at all) yields
//! the stock portal: built-in Tamil Nadu cities, no fixtures, entropy-seeded
//! RNG, three routes per query.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use tn_core::{CityTable, PortalRng};

use crate::{load_cities_csv, DataError, JsonFixtureStore};

/// Top-level portal configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Custom city table CSV.  `None` uses the built-in ten cities.
    pub cities_csv: Option<PathBuf>,

    /// Route fixture JSON.  `None` means synthesis-only.
    pub routes_json: Option<PathBuf>,

    /// RNG seed for reproducible runs.  `None` seeds from OS entropy,
    /// matching the live portal's run-to-run variation.
    pub seed: Option<u64>,

    /// Routes returned per query.
    pub route_count: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            cities_csv:  None,
            routes_json: None,
            seed:        None,
            route_count: 3,
        }
    }
}

impl PortalConfig {
    /// Read a configuration file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let file = std::fs::File::open(path).map_err(DataError::Io)?;
        serde_json::from_reader(file).map_err(|e| DataError::Parse(e.to_string()))
    }

    /// Resolve the city table: the configured CSV, or the built-in cities.
    pub fn city_table(&self) -> Result<CityTable, DataError> {
        match &self.cities_csv {
            Some(path) => load_cities_csv(path),
            None       => Ok(CityTable::tamil_nadu()),
        }
    }

    /// Resolve the fixture store, applying the degrade-to-empty policy for a
    /// configured-but-broken fixture file.
    pub fn fixture_store(&self) -> JsonFixtureStore {
        match &self.routes_json {
            Some(path) => JsonFixtureStore::load_or_empty(path),
            None       => JsonFixtureStore::empty(),
        }
    }

    /// Construct the application RNG per the configured seed.
    pub fn rng(&self) -> PortalRng {
        match self.seed {
            Some(seed) => PortalRng::new(seed),
            None       => PortalRng::from_entropy(),
        }
    }
}
