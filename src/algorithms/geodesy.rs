//! Great-circle geodesy on a spherical Earth
//!
//! Pure functions with no failure modes: malformed numeric input such as NaN
//! propagates through as NaN rather than producing an error.

use crate::core::constants::EARTH_RADIUS_KM;

/// Normalize an angle in degrees into [0, 360).
///
/// The double-modulo form handles negative input correctly
/// (`-10` normalizes to `350`).
pub fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Initial bearing (forward azimuth) from one coordinate toward another,
/// degrees clockwise from North in [0, 360).
///
/// Inputs are in degrees. Coincident points yield 0, not NaN.
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

/// Great-circle distance between two coordinates in kilometers, via the
/// haversine formula at Earth mean radius.
pub fn great_circle_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lambda / 2.0).sin().powi(2);

    // Rounding near antipodal points can nudge a just past 1, where asin
    // returns NaN. The comparison is false for NaN, so NaN input still
    // propagates unchanged.
    let a = if a > 1.0 { 1.0 } else { a };

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}
