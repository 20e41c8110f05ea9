//! City table: the read-only name → position mapping behind every query.
//!
//! # Lifecycle
//!
//! A `CityTable` is constructed once at process start (from the built-in
//! [`tamil_nadu`](CityTable::tamil_nadu) data or a loader in `tn-data`) and
//! never mutated afterwards.  The simulator receives it by value at
//! construction, so there is no hidden global state and no reload path.
//!
//! # Data layout
//!
//! Names and positions live in parallel `Vec`s in insertion order, with a
//! `HashMap` from name to index for O(1) lookup.  Insertion order is stable,
//! which keeps index-based random picks ("Via <city>" labels) reproducible
//! under a seeded RNG.

use std::collections::HashMap;

use crate::{CoreError, GeoPoint};

/// Immutable mapping from city name to geographic position.
#[derive(Clone, Debug)]
pub struct CityTable {
    names:     Vec<String>,
    positions: Vec<GeoPoint>,
    index:     HashMap<String, usize>,
}

impl CityTable {
    /// Build a table from `(name, position)` pairs.
    ///
    /// Fails with [`CoreError::DuplicateCity`] if a name appears twice —
    /// names are the unique key for every route query.
    pub fn new<I>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (String, GeoPoint)>,
    {
        let entries = entries.into_iter();
        let (lower, _) = entries.size_hint();

        let mut names     = Vec::with_capacity(lower);
        let mut positions = Vec::with_capacity(lower);
        let mut index     = HashMap::with_capacity(lower);

        for (name, pos) in entries {
            if index.contains_key(&name) {
                return Err(CoreError::DuplicateCity(name));
            }
            index.insert(name.clone(), names.len());
            names.push(name);
            positions.push(pos);
        }

        Ok(Self { names, positions, index })
    }

    /// The ten major Tamil Nadu cities the portal ships with.
    pub fn tamil_nadu() -> Self {
        let entries = [
            ("Chennai",         13.0827, 80.2707),
            ("Coimbatore",      11.0168, 76.9558),
            ("Madurai",          9.9252, 78.1198),
            ("Tiruchirappalli", 10.7905, 78.7047),
            ("Salem",           11.6643, 78.1460),
            ("Vellore",         12.9165, 79.1325),
            ("Tirunelveli",      8.7139, 77.7567),
            ("Thoothukudi",      8.7642, 78.1348),
            ("Erode",           11.3410, 77.7172),
            ("Thanjavur",       10.7870, 79.1378),
        ];
        Self::new(
            entries
                .into_iter()
                .map(|(n, lat, lon)| (n.to_owned(), GeoPoint::new(lat, lon))),
        )
        .expect("built-in city table is duplicate-free")
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// `true` if `name` is a known city.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of `name`, or `None` if unknown.
    #[inline]
    pub fn position(&self, name: &str) -> Option<GeoPoint> {
        self.index.get(name).map(|&i| self.positions[i])
    }

    // ── Dimensions & iteration ────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// City names in insertion order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterator over `(name, position)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, GeoPoint)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.positions.iter().copied())
    }
}
