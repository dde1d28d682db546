//! Great-circle distance and pin placement scoring

use crate::types::{GeoPoint, GeographyTarget};

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance/tolerance ratio below which a correct pin earns three stars
pub const THREE_STAR_RATIO: f64 = 0.3;

/// Distance/tolerance ratio below which a correct pin earns two stars
pub const TWO_STAR_RATIO: f64 = 0.6;

/// Haversine great-circle distance between two points in kilometres
///
/// Symmetric and non-negative. Inputs are not clamped; callers pass finite
/// coordinates.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    // rounding can push `h` marginally past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Whether `guess` lies within the target's tolerance radius (inclusive)
pub fn is_within_tolerance(target: &GeographyTarget, guess: GeoPoint) -> bool {
    distance_km(target.point, guess) <= target.tolerance_km
}

/// Star score (0-3) for a pin placed at `guess`
///
/// 0 outside the tolerance radius. Inside, the distance/tolerance ratio
/// decides: `< 0.3` gives 3, `< 0.6` gives 2, anything else 1.
pub fn score_tier(target: &GeographyTarget, guess: GeoPoint) -> u8 {
    Verdict::new(target, distance_km(target.point, guess)).stars
}

/// Outcome of a single pin placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    /// Great-circle distance between pin and target in kilometres
    pub distance_km: f64,
    /// Pin is within the tolerance radius
    pub correct: bool,
    /// Star score, see [`score_tier`]
    pub stars: u8,
}

impl Verdict {
    fn new(target: &GeographyTarget, distance_km: f64) -> Self {
        let correct = distance_km <= target.tolerance_km;
        let stars = if !correct {
            0
        } else {
            let ratio = distance_km / target.tolerance_km;
            if ratio < THREE_STAR_RATIO {
                3
            } else if ratio < TWO_STAR_RATIO {
                2
            } else {
                1
            }
        };

        Self {
            distance_km,
            correct,
            stars,
        }
    }
}

/// Judge a pin placement: distance, correctness and stars in one pass
pub fn evaluate(target: &GeographyTarget, guess: GeoPoint) -> Verdict {
    Verdict::new(target, distance_km(target.point, guess))
}
