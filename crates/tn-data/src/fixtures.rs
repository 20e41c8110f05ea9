//! JSON route-fixture store.
//!
//! # File format
//!
//! An array of route records, the portal's `data/routes.json` shape:
//!
//! ```json
//! [
//!   {
//!     "id": "Chennai-Coimbatore-1",
//!     "name": "Via Salem",
//!     "start": "Chennai",
//!     "end": "Coimbatore",
//!     "distance": 507.2,
//!     "time": 420,
//!     "traffic": "Moderate",
//!     "toll_plazas": 5,
//!     "estimated_toll_cost": 375.0
//!   }
//! ]
//! ```
//!
//! `toll_plazas`, `estimated_toll_cost` and `affected_by_event` are optional.
//! A stored `color` field is ignored: display color always derives from
//! `traffic`, so a hand-edited record cannot ship an inconsistent pair.
//!
//! # Failure policy
//!
//! [`JsonFixtureStore::load`] is strict — any I/O or parse problem is a
//! [`DataError`].  [`JsonFixtureStore::load_or_empty`] applies the portal's
//! degrade policy at the storage boundary: log a warning and continue with
//! an empty store, sending every query to the synthesis fallback.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tn_core::TrafficLevel;
use tn_routes::{FixtureSource, Route};

use crate::DataError;

// ── On-disk record ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    id:       String,
    name:     String,
    start:    String,
    end:      String,
    distance: f32,
    time:     u32,
    traffic:  String,
    #[serde(default)]
    affected_by_event: bool,
    #[serde(default)]
    toll_plazas: Option<u32>,
    #[serde(default)]
    estimated_toll_cost: Option<f32>,
}

impl RouteRecord {
    fn into_route(self) -> Result<Route, DataError> {
        let traffic = TrafficLevel::from_name(&self.traffic).ok_or_else(|| {
            DataError::Parse(format!(
                "unknown traffic level {:?} in route {:?}",
                self.traffic, self.id
            ))
        })?;

        Ok(Route {
            id:                  self.id,
            name:                self.name,
            start:               self.start,
            end:                 self.end,
            distance_km:         self.distance,
            time_min:            self.time,
            traffic,
            affected_by_event:   self.affected_by_event,
            toll_plazas:         self.toll_plazas,
            estimated_toll_cost: self.estimated_toll_cost,
        })
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// Precomputed routes grouped by directed `(start, end)` pair, in file order.
pub struct JsonFixtureStore {
    by_pair: HashMap<(String, String), Vec<Route>>,
}

impl JsonFixtureStore {
    /// A store with no routes — every query synthesizes.
    pub fn empty() -> Self {
        Self { by_pair: HashMap::new() }
    }

    /// Strictly load a fixture file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let file = std::fs::File::open(path).map_err(DataError::Io)?;
        Self::from_reader(file)
    }

    /// Like [`load`](Self::load) but accepts any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) or for embedded data.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let records: Vec<RouteRecord> =
            serde_json::from_reader(reader).map_err(|e| DataError::Parse(e.to_string()))?;

        let mut by_pair: HashMap<(String, String), Vec<Route>> = HashMap::new();
        for record in records {
            let route = record.into_route()?;
            by_pair
                .entry((route.start.clone(), route.end.clone()))
                .or_default()
                .push(route);
        }

        Ok(Self { by_pair })
    }

    /// Load a fixture file, degrading to an empty store on any failure.
    ///
    /// Missing or malformed storage means "no fixtures": the warning below is
    /// the only trace, and all queries fall through to synthesis.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(store) => store,
            Err(err) => {
                log::warn!(
                    "route fixtures unavailable at {}: {err}; continuing with synthesis only",
                    path.display()
                );
                Self::empty()
            }
        }
    }

    /// Total stored routes across all pairs.
    pub fn len(&self) -> usize {
        self.by_pair.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pair.is_empty()
    }
}

impl FixtureSource for JsonFixtureStore {
    fn lookup(&self, start: &str, end: &str) -> Vec<Route> {
        self.by_pair
            .get(&(start.to_owned(), end.to_owned()))
            .cloned()
            .unwrap_or_default()
    }
}
