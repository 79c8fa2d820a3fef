//! Geodesy algorithms

pub mod geodesy;

pub use geodesy::{great_circle_distance_km, initial_bearing, normalize_degrees};
