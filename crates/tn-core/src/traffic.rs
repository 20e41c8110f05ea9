//! Traffic severity levels and their display-color mapping.
//!
//! The five levels form an ordered scale; comparisons via `PartialOrd`/`Ord`
//! follow increasing severity.  Each level maps to exactly one display color
//! and there is no way to pair a level with any other color — rendering code
//! must go through [`TrafficLevel::color`].

/// Congestion severity of a route, in increasing order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
    #[cfg_attr(feature = "serde", serde(rename = "Very Heavy"))]
    VeryHeavy,
    Gridlock,
}

impl TrafficLevel {
    /// All levels in increasing severity — handy for iteration in tests and
    /// legend rendering.
    pub const ALL: [TrafficLevel; 5] = [
        TrafficLevel::Light,
        TrafficLevel::Moderate,
        TrafficLevel::Heavy,
        TrafficLevel::VeryHeavy,
        TrafficLevel::Gridlock,
    ];

    /// The fixed map-display color for this level.
    pub fn color(self) -> &'static str {
        match self {
            TrafficLevel::Light     => "green",
            TrafficLevel::Moderate  => "blue",
            TrafficLevel::Heavy     => "orange",
            TrafficLevel::VeryHeavy => "red",
            TrafficLevel::Gridlock  => "darkred",
        }
    }

    /// Bucket a realized travel-time factor onto the severity scale.
    ///
    /// Bucket index is `min(4, floor(factor × 2.5))`, clamped at 0 — a route
    /// whose time came out 30 % over nominal (factor 1.3) lands in
    /// `VeryHeavy`, one 30 % under (0.7) in `Moderate`.
    pub fn from_time_factor(factor: f32) -> TrafficLevel {
        let idx = ((factor * 2.5).floor() as i32).clamp(0, 4);
        Self::ALL[idx as usize]
    }

    /// Human-readable label, matching the portal's stored route records.
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficLevel::Light     => "Light",
            TrafficLevel::Moderate  => "Moderate",
            TrafficLevel::Heavy     => "Heavy",
            TrafficLevel::VeryHeavy => "Very Heavy",
            TrafficLevel::Gridlock  => "Gridlock",
        }
    }

    /// Parse a stored label back into a level.  Returns `None` for anything
    /// that is not one of the five exact names.
    pub fn from_name(name: &str) -> Option<TrafficLevel> {
        match name {
            "Light"      => Some(TrafficLevel::Light),
            "Moderate"   => Some(TrafficLevel::Moderate),
            "Heavy"      => Some(TrafficLevel::Heavy),
            "Very Heavy" => Some(TrafficLevel::VeryHeavy),
            "Gridlock"   => Some(TrafficLevel::Gridlock),
            _            => None,
        }
    }
}

impl std::fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
