//! `tn-data` — data-loading collaborators for the `tn_traffic` portal.
//!
//! Everything the simulator consumes from disk is loaded here, once, at
//! process start: the route fixture file, an optional custom city table, and
//! the portal configuration.  This crate owns the degrade-gracefully policy
//! for fixtures — a missing or malformed fixture file becomes an explicit
//! empty store (with a warning), never an error inside a query.
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`fixtures`] | `JsonFixtureStore` (`data/routes.json` format)    |
//! | [`cities`]   | CSV city-table loader                             |
//! | [`config`]   | `PortalConfig` and its resolver helpers           |
//! | [`error`]    | `DataError`, `DataResult`                         |

pub mod cities;
pub mod config;
pub mod error;
pub mod fixtures;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cities::{load_cities_csv, load_cities_reader};
pub use config::PortalConfig;
pub use error::{DataError, DataResult};
pub use fixtures::JsonFixtureStore;
