//! Seeded RNG wrapper for route synthesis.
//!
//! Every simulator entry point takes a generic `&mut R where R: rand::Rng`,
//! so any generator can be injected.  `PortalRng` is the one applications
//! are expected to hold: a `SmallRng` either seeded explicitly (reproducible
//! runs, tests) or from OS entropy (the portal's default, where route
//! variations differ run to run).

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Application-level RNG for route synthesis and congestion sampling.
///
/// Hold one per session/query loop; pass `inner()` into the simulator.
/// Single-threaded by design — for parallel callers, give each thread its
/// own `PortalRng`.
pub struct PortalRng(SmallRng);

impl PortalRng {
    /// Seed deterministically.  The same seed always produces the same
    /// sequence of synthesized routes.
    pub fn new(seed: u64) -> Self {
        PortalRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy — non-reproducible, one fresh stream per process.
    pub fn from_entropy() -> Self {
        PortalRng(SmallRng::from_entropy())
    }

    /// Expose the inner `SmallRng` for use with `rand` APIs and the
    /// simulator's generic RNG parameters.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
