//! `tn-routes` — the Route & ETA simulator for the `tn_traffic` portal.
//!
//! The simulator answers one question: "what does the drive from A to B look
//! like right now?"  Stored route fixtures are authoritative when present;
//! otherwise candidate routes are synthesized from the haversine base
//! distance with randomized distance/time/traffic variation.
//!
//! # What lives here
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`route`]      | `Route` value object and its derived fields          |
//! | [`simulator`]  | `RouteSimulator`: `find_routes`, `alternative_routes`|
//! | [`fixtures`]   | `FixtureSource` trait, `NoFixtures`                  |
//! | [`congestion`] | Hourly congestion-density model                      |
//! | [`geometry`]   | Jittered route polylines for map rendering           |
//! | [`error`]      | `RouteError`, `RouteResult`                          |
//!
//! # Randomness
//!
//! Every entry point that draws randomness takes `&mut R where R: rand::Rng`.
//! Applications pass `tn_core::PortalRng::inner()`; tests inject a seeded
//! generator and get reproducible output.

pub mod congestion;
pub mod error;
pub mod fixtures;
pub mod geometry;
pub mod route;
pub mod simulator;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RouteError, RouteResult};
pub use fixtures::{FixtureSource, NoFixtures};
pub use route::Route;
pub use simulator::RouteSimulator;
