//! Fixture-source trait: the seam between the simulator and stored routes.
//!
//! "No fixtures available" is a first-class return value (an empty vector),
//! not a control-flow side effect.  Implementations that read storage must
//! resolve I/O and parse failures on their side of the seam — typically by
//! degrading to empty at load time, as `tn-data`'s JSON store does — so the
//! simulator never sees a storage error.

use crate::Route;

/// Supplier of precomputed routes for a directed city pair.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; the simulator holds the source
/// behind `&self` and is safe to share across threads.
pub trait FixtureSource: Send + Sync {
    /// Routes stored for `(start, end)`, preserving stored order.
    ///
    /// Empty means "no fixtures" and sends the simulator to the synthesis
    /// fallback.  Stored records are authoritative: callers return them
    /// unmodified and in order.
    fn lookup(&self, start: &str, end: &str) -> Vec<Route>;
}

/// A [`FixtureSource`] with no stored routes — every query synthesizes.
///
/// Useful as a placeholder in tests and for deployments that have not
/// shipped a route fixture file.
pub struct NoFixtures;

impl FixtureSource for NoFixtures {
    fn lookup(&self, _start: &str, _end: &str) -> Vec<Route> {
        vec![]
    }
}
