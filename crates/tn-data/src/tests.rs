//! Integration tests for tn-data.
//!
//! File-backed cases go through `tempfile`; everything else uses in-memory
//! readers (`std::io::Cursor`).

#[cfg(test)]
mod fixture_store {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use tn_core::{CityTable, TrafficLevel};
    use tn_routes::{FixtureSource, RouteSimulator};

    use crate::{DataError, JsonFixtureStore};

    const ROUTES_JSON: &str = r#"[
        {
            "id": "Chennai-Coimbatore-1",
            "name": "Via Salem",
            "start": "Chennai",
            "end": "Coimbatore",
            "distance": 507.2,
            "time": 420,
            "traffic": "Moderate",
            "color": "blue",
            "toll_plazas": 5,
            "estimated_toll_cost": 375.0
        },
        {
            "id": "Chennai-Coimbatore-2",
            "name": "Via Tiruchirappalli",
            "start": "Chennai",
            "end": "Coimbatore",
            "distance": 530.8,
            "time": 465,
            "traffic": "Heavy"
        },
        {
            "id": "Madurai-Chennai-1",
            "name": "Via Tiruchirappalli",
            "start": "Madurai",
            "end": "Chennai",
            "distance": 462.0,
            "time": 405,
            "traffic": "Light"
        }
    ]"#;

    #[test]
    fn parses_and_groups_by_pair() {
        let store = JsonFixtureStore::from_reader(Cursor::new(ROUTES_JSON)).unwrap();
        assert_eq!(store.len(), 3);

        let pair = store.lookup("Chennai", "Coimbatore");
        assert_eq!(pair.len(), 2);
        // File order preserved within the pair.
        assert_eq!(pair[0].id, "Chennai-Coimbatore-1");
        assert_eq!(pair[1].id, "Chennai-Coimbatore-2");

        assert_eq!(pair[0].distance_km, 507.2);
        assert_eq!(pair[0].time_min, 420);
        assert_eq!(pair[0].traffic, TrafficLevel::Moderate);
        assert_eq!(pair[0].toll_plazas, Some(5));
        assert_eq!(pair[0].estimated_toll_cost, Some(375.0));

        // Optional fields default.
        assert_eq!(pair[1].toll_plazas, None);
        assert!(!pair[1].affected_by_event);
    }

    #[test]
    fn lookup_is_directed() {
        let store = JsonFixtureStore::from_reader(Cursor::new(ROUTES_JSON)).unwrap();
        assert_eq!(store.lookup("Madurai", "Chennai").len(), 1);
        assert!(store.lookup("Chennai", "Madurai").is_empty());
        assert!(store.lookup("Salem", "Erode").is_empty());
    }

    #[test]
    fn stored_color_is_ignored() {
        // The first record claims "blue" but color always derives from the
        // parsed traffic level.
        let store = JsonFixtureStore::from_reader(Cursor::new(ROUTES_JSON)).unwrap();
        let route = &store.lookup("Chennai", "Coimbatore")[0];
        assert_eq!(route.color(), route.traffic.color());
    }

    #[test]
    fn unknown_traffic_level_is_a_parse_error() {
        let bad = r#"[{
            "id": "X-Y-1", "name": "Via Z", "start": "X", "end": "Y",
            "distance": 10.0, "time": 15, "traffic": "Apocalyptic"
        }]"#;
        let result = JsonFixtureStore::from_reader(Cursor::new(bad));
        assert!(matches!(result, Err(DataError::Parse(msg)) if msg.contains("Apocalyptic")));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = JsonFixtureStore::from_reader(Cursor::new("not json"));
        assert!(matches!(result, Err(DataError::Parse(_))));
    }

    #[test]
    fn load_or_empty_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFixtureStore::load_or_empty(&dir.path().join("absent.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn load_or_empty_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.json");
        std::fs::write(&path, "{{{{").unwrap();
        let store = JsonFixtureStore::load_or_empty(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn load_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.json");
        std::fs::write(&path, ROUTES_JSON).unwrap();

        let store = JsonFixtureStore::load(&path).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn simulator_prefers_stored_routes() {
        let store = JsonFixtureStore::from_reader(Cursor::new(ROUTES_JSON)).unwrap();
        let sim = RouteSimulator::new(CityTable::tamil_nadu(), store);
        let mut rng = SmallRng::seed_from_u64(7);

        let routes = sim.find_routes(&mut rng, "Chennai", "Coimbatore", 3).unwrap();
        assert_eq!(routes.len(), 2); // min(count, stored)
        assert_eq!(routes[0].id, "Chennai-Coimbatore-1");

        // Reverse fallback through the store.
        let routes = sim.find_routes(&mut rng, "Chennai", "Madurai", 1).unwrap();
        assert_eq!(routes[0].id, "Madurai-Chennai-1");
        assert_eq!(routes[0].start, "Chennai");
        assert_eq!(routes[0].end, "Madurai");
    }
}

#[cfg(test)]
mod cities {
    use std::io::Cursor;

    use crate::{load_cities_reader, DataError};

    #[test]
    fn loads_rows_in_order() {
        let csv = "name,lat,lon\nChennai,13.0827,80.2707\nSalem,11.6643,78.1460\n";
        let table = load_cities_reader(Cursor::new(csv)).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.names()[0], "Chennai");
        assert_eq!(table.names()[1], "Salem");
        assert!((table.position("Salem").unwrap().lat - 11.6643).abs() < 1e-4);
    }

    #[test]
    fn duplicate_city_rejected() {
        let csv = "name,lat,lon\nChennai,13.0,80.2\nChennai,13.1,80.3\n";
        let result = load_cities_reader(Cursor::new(csv));
        assert!(matches!(result, Err(DataError::City(_))));
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let csv = "name,lat,lon\nChennai,not-a-number,80.2\n";
        let result = load_cities_reader(Cursor::new(csv));
        assert!(matches!(result, Err(DataError::Parse(_))));
    }
}

#[cfg(test)]
mod config {
    use crate::PortalConfig;

    #[test]
    fn defaults() {
        let cfg = PortalConfig::default();
        assert_eq!(cfg.route_count, 3);
        assert!(cfg.cities_csv.is_none());
        assert!(cfg.routes_json.is_none());
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn load_partial_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.json");
        std::fs::write(&path, r#"{"seed": 42, "route_count": 5}"#).unwrap();

        let cfg = PortalConfig::load(&path).unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.route_count, 5);
        assert!(cfg.cities_csv.is_none());
    }

    #[test]
    fn resolves_builtin_city_table() {
        let cfg = PortalConfig::default();
        let table = cfg.city_table().unwrap();
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn resolves_empty_fixture_store() {
        let cfg = PortalConfig::default();
        assert!(cfg.fixture_store().is_empty());
    }

    #[test]
    fn resolves_configured_files() {
        let dir = tempfile::tempdir().unwrap();
        let cities = dir.path().join("cities.csv");
        std::fs::write(&cities, "name,lat,lon\nA,1.0,2.0\nB,3.0,4.0\n").unwrap();

        let cfg = PortalConfig {
            cities_csv: Some(cities),
            routes_json: Some(dir.path().join("absent.json")), // degrade path
            seed: Some(1),
            route_count: 3,
        };
        assert_eq!(cfg.city_table().unwrap().len(), 2);
        assert!(cfg.fixture_store().is_empty());
        let _rng = cfg.rng();
    }
}
