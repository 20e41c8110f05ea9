//! `tn-core` — foundational types for the `tn_traffic` portal core.
//!
//! This crate is a dependency of every other `tn-*` crate.  It intentionally
//! has no `tn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, haversine distance, interpolation   |
//! | [`city`]    | `CityTable` (name → position, read-only)        |
//! | [`traffic`] | `TrafficLevel` enum and its display-color map   |
//! | [`rng`]     | `PortalRng` (seeded `SmallRng` wrapper)         |
//! | [`error`]   | `CoreError`, `CoreResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod city;
pub mod error;
pub mod geo;
pub mod rng;
pub mod traffic;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use city::CityTable;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use rng::PortalRng;
pub use traffic::TrafficLevel;
