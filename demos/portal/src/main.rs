//! portal — end-to-end demo of the tn_traffic route & ETA simulator.
//!
//! Wires the built-in Tamil Nadu city table, a (deliberately absent) route
//! fixture file, and a seeded RNG into one query session: plan a trip,
//! reroute around an incident, and print the congestion outlook the route
//! details panel would chart.

use anyhow::Result;

use tn_core::PortalRng;
use tn_routes::congestion::{hourly_profile, CityClass, DayKind};
use tn_routes::geometry::{route_polyline, DEFAULT_INTERMEDIATE, DEFAULT_JITTER_DEG};
use tn_routes::{Route, RouteSimulator};
use tn_data::PortalConfig;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64   = 42;
const ORIGIN:      &str  = "Chennai";
const DESTINATION: &str  = "Coimbatore";
const EVENT_CITY:  &str  = "Salem";

fn print_routes(routes: &[Route]) {
    println!(
        "{:<24} {:<22} {:>9} {:>8} {:<12} {:>7}",
        "Id", "Name", "Dist km", "ETA min", "Traffic", "Fuel ₹"
    );
    println!("{}", "-".repeat(88));
    for route in routes {
        println!(
            "{:<24} {:<22} {:>9.1} {:>8} {:<12} {:>7}{}",
            route.id,
            route.name,
            route.distance_km,
            route.time_min,
            format!("{} ({})", route.traffic, route.color()),
            route.estimated_fuel_cost(),
            if route.affected_by_event { "  ⚠ event" } else { "" },
        );
    }
    println!();
}

fn main() -> Result<()> {
    println!("=== tn_traffic portal demo ===");
    println!("{ORIGIN} → {DESTINATION}  |  Seed: {SEED}");
    println!();

    // 1. Resolve configuration: built-in cities, no fixture file.
    let config = PortalConfig { seed: Some(SEED), ..PortalConfig::default() };
    let cities = config.city_table()?;
    let fixtures = config.fixture_store();
    println!("City table: {} cities  |  fixtures: {} routes", cities.len(), fixtures.len());
    println!();

    // 2. Build the simulator and the session RNG.
    let sim = RouteSimulator::new(cities, fixtures);
    let mut rng = PortalRng::new(SEED);

    // 3. Plain route query.
    let routes = sim.find_routes(rng.inner(), ORIGIN, DESTINATION, config.route_count)?;
    println!("Route options ({}):", routes.len());
    print_routes(&routes);

    // 4. The same list as the portal API would serialize it.
    println!("First route as JSON:");
    println!("{}", serde_json::to_string_pretty(&routes[0])?);
    println!();

    // 5. Reroute around an incident near Salem: one extra candidate, the
    //    shortest marked as degraded.
    let event = sim.cities().position(EVENT_CITY);
    let alternatives =
        sim.alternative_routes(rng.inner(), ORIGIN, DESTINATION, event, config.route_count)?;
    println!("Alternatives around an incident near {EVENT_CITY}:");
    print_routes(&alternatives);

    // 6. Congestion outlook for the origin metro on a weekday.
    let profile = hourly_profile(rng.inner(), DayKind::Weekday, CityClass::of(ORIGIN));
    println!("Weekday congestion outlook for {ORIGIN} (% by hour):");
    for (hour, density) in profile.iter().enumerate() {
        println!("  {hour:02}:00  {}", "#".repeat((density / 5) as usize));
    }
    println!();

    // 7. Display polyline for the first route.
    let from = sim.cities().position(ORIGIN).expect("origin is built-in");
    let to   = sim.cities().position(DESTINATION).expect("destination is built-in");
    let line = route_polyline(rng.inner(), from, to, DEFAULT_INTERMEDIATE, DEFAULT_JITTER_DEG);
    println!("Map polyline ({} points):", line.len());
    for point in &line {
        println!("  {point}");
    }

    Ok(())
}
