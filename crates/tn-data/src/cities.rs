//! CSV city-table loader.
//!
//! # CSV format
//!
//! One row per city; names must be unique.
//!
//! ```csv
//! name,lat,lon
//! Chennai,13.0827,80.2707
//! Coimbatore,11.0168,76.9558
//! ```
//!
//! Deployments without a custom file use [`CityTable::tamil_nadu`] instead;
//! see [`crate::PortalConfig::city_table`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tn_core::{CityTable, GeoPoint};

use crate::DataError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CityRecord {
    name: String,
    lat:  f32,
    lon:  f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`CityTable`] from a CSV file, preserving row order.
pub fn load_cities_csv(path: &Path) -> Result<CityTable, DataError> {
    let file = std::fs::File::open(path).map_err(DataError::Io)?;
    load_cities_reader(file)
}

/// Like [`load_cities_csv`] but accepts any `Read` source.
pub fn load_cities_reader<R: Read>(reader: R) -> Result<CityTable, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut entries = Vec::new();
    for result in csv_reader.deserialize::<CityRecord>() {
        let row = result.map_err(|e| DataError::Parse(e.to_string()))?;
        entries.push((row.name, GeoPoint::new(row.lat, row.lon)));
    }

    Ok(CityTable::new(entries)?)
}
