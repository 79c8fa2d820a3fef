//! Physical constants and built-in reference coordinates

use crate::core::types::Coordinate;

/// Earth mean radius used for great-circle distances (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Location of the Kaaba in Mecca, the built-in Qibla target
pub const KAABA: Coordinate = Coordinate {
    latitude: 21.4225,
    longitude: 39.8262,
};
