//! The `Route` value object.
//!
//! A `Route` is created fresh for every query and lives only for that
//! query/render cycle — there is no cache or storage layer behind it.  The
//! one permitted in-place mutation is [`Route::mark_event_affected`], which
//! updates all event-derived fields in a single step so traffic level and
//! display color can never be observed inconsistent.

use tn_core::TrafficLevel;

/// Multiplier applied to `time_min` when an event degrades a route.
pub const EVENT_DELAY_FACTOR: f32 = 1.5;

/// Estimated fuel cost per kilometre, in rupees.
const FUEL_COST_PER_KM: f32 = 7.5;

/// One candidate route between two cities.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Stable identifier, `"<start>-<end>-<n>"` for synthesized routes.
    pub id: String,

    /// Display label ("Via Salem").  Non-authoritative: carries no routing
    /// meaning and may repeat across routes.
    pub name: String,

    /// Origin city name.
    pub start: String,

    /// Destination city name.
    pub end: String,

    /// Route length in kilometres.  Always > 0 for distinct cities.
    pub distance_km: f32,

    /// Estimated travel time in minutes.  Always >= 1.
    pub time_min: u32,

    /// Congestion severity.  The display color is derived from this via
    /// [`Route::color`] and never stored separately.
    pub traffic: TrafficLevel,

    /// Set once by [`Route::mark_event_affected`]; never cleared.
    pub affected_by_event: bool,

    /// Number of toll plazas along the route, when the fixture records it.
    pub toll_plazas: Option<u32>,

    /// Total toll cost in rupees, when the fixture records it.
    pub estimated_toll_cost: Option<f32>,
}

impl Route {
    /// The fixed display color for this route's traffic level.
    #[inline]
    pub fn color(&self) -> &'static str {
        self.traffic.color()
    }

    /// Degrade this route to reflect a disruption near its path.
    ///
    /// Travel time grows by [`EVENT_DELAY_FACTOR`] (rounded) and the traffic
    /// level is forced to `VeryHeavy`; because color derives from the level,
    /// both move together.
    pub fn mark_event_affected(&mut self) {
        self.time_min = (self.time_min as f32 * EVENT_DELAY_FACTOR).round() as u32;
        self.traffic = TrafficLevel::VeryHeavy;
        self.affected_by_event = true;
    }

    /// The same route driven the other way: start/end swapped, distance and
    /// time kept (the road is treated as symmetric).
    pub fn reversed(&self) -> Route {
        let mut r = self.clone();
        std::mem::swap(&mut r.start, &mut r.end);
        r
    }

    /// Rough fuel cost for the route, in rupees.
    pub fn estimated_fuel_cost(&self) -> u32 {
        (self.distance_km * FUEL_COST_PER_KM).round() as u32
    }
}
