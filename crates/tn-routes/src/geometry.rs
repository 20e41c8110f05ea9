//! Jittered polyline geometry for drawing a route between two cities.
//!
//! The portal has no persisted road geometry, so route lines are drawn as a
//! straight interpolation between the endpoints with a small random offset
//! on each interior point.  The jitter is cosmetic — it separates candidate
//! routes visually and carries no routing meaning.

use rand::Rng;

use tn_core::GeoPoint;

/// Interior waypoints the portal renders per route.
pub const DEFAULT_INTERMEDIATE: usize = 3;

/// Per-axis jitter half-range in degrees.
pub const DEFAULT_JITTER_DEG: f32 = 0.25;

/// Trace a displayable polyline from `from` to `to`.
///
/// The first and last points are the exact endpoints.  Each of the
/// `intermediate` interior points sits on the straight line at an even
/// fraction, displaced independently on both axes by a uniform draw in
/// `[-jitter_deg, jitter_deg]`.
pub fn route_polyline<R: Rng>(
    rng:          &mut R,
    from:         GeoPoint,
    to:           GeoPoint,
    intermediate: usize,
    jitter_deg:   f32,
) -> Vec<GeoPoint> {
    let mut points = Vec::with_capacity(intermediate + 2);
    points.push(from);

    for i in 0..intermediate {
        let t = (i + 1) as f32 / (intermediate + 1) as f32;
        let on_line = from.lerp(to, t);
        points.push(GeoPoint::new(
            on_line.lat + rng.gen_range(-jitter_deg..=jitter_deg),
            on_line.lon + rng.gen_range(-jitter_deg..=jitter_deg),
        ));
    }

    points.push(to);
    points
}
