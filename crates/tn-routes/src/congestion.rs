//! Hourly congestion-density model behind the traffic-prediction panel.
//!
//! Densities are percentages in `10..=100`, built from three ingredients:
//! a hand-tuned hourly base curve per day kind (commute rushes on weekdays,
//! shopping hours on weekends), a randomly sampled weather multiplier, and a
//! fixed multiplier for the big metro areas.

use rand::Rng;

/// Daily congestion shape.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DayKind {
    Weekday,
    Weekend,
}

/// Simulated weather regimes and their congestion multipliers.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Weather {
    Clear,
    LightRain,
    HeavyRain,
}

impl Weather {
    pub const ALL: [Weather; 3] = [Weather::Clear, Weather::LightRain, Weather::HeavyRain];

    /// Congestion multiplier for this regime.
    pub fn factor(self) -> f32 {
        match self {
            Weather::Clear     => 1.0,
            Weather::LightRain => 1.1,
            Weather::HeavyRain => 1.2,
        }
    }
}

/// Congestion class of a city.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CityClass {
    /// Chennai, Coimbatore, Madurai — consistently busier.
    Metro,
    Regional,
}

impl CityClass {
    const METROS: [&'static str; 3] = ["Chennai", "Coimbatore", "Madurai"];

    /// Classify a city by name.  Unknown names are `Regional`.
    pub fn of(name: &str) -> CityClass {
        if Self::METROS.contains(&name) {
            CityClass::Metro
        } else {
            CityClass::Regional
        }
    }

    /// Congestion multiplier for this class.
    pub fn factor(self) -> f32 {
        match self {
            CityClass::Metro    => 1.2,
            CityClass::Regional => 1.0,
        }
    }
}

/// Base congestion density (percent) for `hour` of a day, before weather and
/// city-class factors.
///
/// Weekday bands: morning rush ramps 6–10, lunch bump 12–14, evening rush
/// peaks around 18, late-night floor below 5 and above 22.  Weekend bands:
/// late-morning bump 9–11, long shopping plateau 12–20, late-night floor.
pub fn base_density(day: DayKind, hour: u32) -> u32 {
    match day {
        DayKind::Weekday => match hour {
            6..=10  => 60 + (hour - 6) * 15,
            12..=14 => 70,
            16..=20 => 85 + (20 - hour.abs_diff(18)) * 5,
            h if h < 5 || h > 22 => 15,
            _ => 50,
        },
        DayKind::Weekend => match hour {
            9..=11  => 65,
            12..=20 => 75,
            h if h < 6 || h > 22 => 20,
            _ => 45,
        },
    }
}

/// Sampled congestion density for one hour, clamped to `10..=100`.
///
/// Weather is drawn fresh from the injected RNG for every sample, so two
/// consecutive calls for the same hour may differ.
pub fn density<R: Rng>(rng: &mut R, day: DayKind, hour: u32, class: CityClass) -> u32 {
    let weather = Weather::ALL[rng.gen_range(0..Weather::ALL.len())];
    let value = (base_density(day, hour) as f32 * weather.factor() * class.factor()) as u32;
    value.clamp(10, 100)
}

/// A full 24-hour congestion profile for the prediction chart.
pub fn hourly_profile<R: Rng>(rng: &mut R, day: DayKind, class: CityClass) -> [u32; 24] {
    std::array::from_fn(|h| density(rng, day, h as u32, class))
}
