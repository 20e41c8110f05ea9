//! The route & ETA simulator.
//!
//! # Pipeline
//!
//! `(origin, destination, count)` → precondition checks → fixture lookup
//! (forward, then reverse pair) → synthesis fallback.  Fixture data is
//! deterministic across calls; synthesis draws from the injected RNG, so the
//! same seed reproduces the same candidate set.
//!
//! # Concurrency
//!
//! All methods take `&self` and touch no shared mutable state.  The city
//! table and fixture source are read-only after construction, so a single
//! simulator can serve concurrent callers without locking.

use rand::Rng;

use tn_core::{CityTable, GeoPoint, TrafficLevel};

use crate::{FixtureSource, Route, RouteError, RouteResult};

/// Nominal travel time in minutes per kilometre, before traffic variation.
const MINUTES_PER_KM: f32 = 1.5;

/// Half-width of the per-route distance variation band (±20 %).
const DISTANCE_SPREAD: f32 = 0.2;

/// Half-width of the per-route time variation band (±30 %).
const TIME_SPREAD: f32 = 0.3;

/// Simulates candidate routes between cities.
///
/// Both collaborators are injected at construction and read-only thereafter:
/// the [`CityTable`] defines the valid endpoints, the [`FixtureSource`]
/// supplies authoritative precomputed routes.
///
/// # Type parameter
///
/// `F` is the fixture source implementation — [`crate::NoFixtures`] for a
/// synthesis-only simulator, or `tn-data`'s JSON store in the portal.
pub struct RouteSimulator<F: FixtureSource> {
    cities:   CityTable,
    fixtures: F,
}

impl<F: FixtureSource> RouteSimulator<F> {
    /// Build a simulator over `cities` and `fixtures`.
    ///
    /// Queries are only satisfiable when the table holds at least two
    /// cities; with fewer, every call fails its endpoint preconditions.
    pub fn new(cities: CityTable, fixtures: F) -> Self {
        Self { cities, fixtures }
    }

    /// The injected city table.
    pub fn cities(&self) -> &CityTable {
        &self.cities
    }

    /// Candidate routes from `origin` to `destination`, best-effort `count`.
    ///
    /// Returns the first `count` stored fixtures for the pair when any exist
    /// (checking `(destination, origin)` as a symmetric fallback), otherwise
    /// exactly `count` synthesized routes.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidEndpoint`] if either city is unknown;
    /// [`RouteError::SameEndpoint`] if `origin == destination`.  Callers
    /// normally pre-validate the pair in the UI, but the simulator defends
    /// against both regardless.
    pub fn find_routes<R: Rng>(
        &self,
        rng:         &mut R,
        origin:      &str,
        destination: &str,
        count:       usize,
    ) -> RouteResult<Vec<Route>> {
        let from = self
            .cities
            .position(origin)
            .ok_or_else(|| RouteError::InvalidEndpoint(origin.to_owned()))?;
        let to = self
            .cities
            .position(destination)
            .ok_or_else(|| RouteError::InvalidEndpoint(destination.to_owned()))?;
        if origin == destination {
            return Err(RouteError::SameEndpoint(origin.to_owned()));
        }

        // Stored fixtures are authoritative: return them unmodified, in
        // stored order, with no re-randomization.
        let stored = self.fixtures.lookup(origin, destination);
        if !stored.is_empty() {
            return Ok(stored.into_iter().take(count).collect());
        }

        // The reverse pair is distance/time-symmetric; swap the endpoints so
        // the records match the requested direction.
        let reverse = self.fixtures.lookup(destination, origin);
        if !reverse.is_empty() {
            return Ok(reverse.iter().take(count).map(Route::reversed).collect());
        }

        Ok(self.synthesize(rng, origin, destination, from, to, count))
    }

    /// Candidate routes with one marked as degraded by a nearby event.
    ///
    /// Fetches `count + 1` routes via [`find_routes`](Self::find_routes),
    /// then — when `event_location` is given — marks the strictly shortest
    /// route (first occurrence wins ties) via [`Route::mark_event_affected`].
    /// The list keeps the `find_routes` ordering.
    ///
    /// The coordinate itself is not consulted yet: the marked route is the
    /// shortest, not the one geographically nearest the event.
    /// TODO: bias the marking toward routes whose polyline passes near
    /// `event_location` once route geometry is persisted with fixtures.
    pub fn alternative_routes<R: Rng>(
        &self,
        rng:            &mut R,
        origin:         &str,
        destination:    &str,
        event_location: Option<GeoPoint>,
        count:          usize,
    ) -> RouteResult<Vec<Route>> {
        let mut routes = self.find_routes(rng, origin, destination, count + 1)?;

        if event_location.is_some() && !routes.is_empty() {
            let mut shortest = 0;
            for (i, route) in routes.iter().enumerate().skip(1) {
                // Strict `<` keeps the first occurrence on ties.
                if route.distance_km < routes[shortest].distance_km {
                    shortest = i;
                }
            }
            routes[shortest].mark_event_affected();
        }

        Ok(routes)
    }

    // ── Synthesis ─────────────────────────────────────────────────────────

    /// Generate `count` synthetic routes from the haversine base distance.
    ///
    /// Each route's draws are independent, so a shorter route can still
    /// carry worse traffic — there is no monotonic ordering between distance
    /// and time across the returned sequence.
    fn synthesize<R: Rng>(
        &self,
        rng:         &mut R,
        origin:      &str,
        destination: &str,
        from:        GeoPoint,
        to:          GeoPoint,
        count:       usize,
    ) -> Vec<Route> {
        let base_km = from.distance_km(to);
        let names   = self.cities.names();

        (0..count)
            .map(|i| {
                let distance_factor = 1.0 + rng.gen_range(-DISTANCE_SPREAD..=DISTANCE_SPREAD);
                let time_factor     = 1.0 + rng.gen_range(-TIME_SPREAD..=TIME_SPREAD);

                let distance_km = round1(base_km * distance_factor);
                // Floor at one minute so near-coincident cities never round
                // down to a zero ETA.
                let time_min = ((distance_km * MINUTES_PER_KM * time_factor).round() as u32).max(1);

                let via = &names[rng.gen_range(0..names.len())];

                Route {
                    id: format!("{origin}-{destination}-{}", i + 1),
                    name: format!("Via {via}"),
                    start: origin.to_owned(),
                    end: destination.to_owned(),
                    distance_km,
                    time_min,
                    traffic: TrafficLevel::from_time_factor(time_factor),
                    affected_by_event: false,
                    toll_plazas: None,
                    estimated_toll_cost: None,
                }
            })
            .collect()
    }
}

/// Round to one decimal place, matching the stored fixture precision.
#[inline]
fn round1(x: f32) -> f32 {
    (x * 10.0).round() / 10.0
}
