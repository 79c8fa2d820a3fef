//! Compass and bearing computation core
//!
//! Resolves a compass heading from heterogeneous device-orientation payloads,
//! computes great-circle bearing and distance from the latest geolocation fix
//! to a selectable target, and derives a render-ready view model. Sensor
//! acquisition, permission prompting, and rendering are external
//! collaborators that feed raw samples in and read the view model back out.

pub mod algorithms;
pub mod api;
pub mod core;
pub mod processing;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Coordinate, HeadingSample, HeadingSource, PositionSample, Target};
pub use crate::core::{EARTH_RADIUS_KM, KAABA};
pub use algorithms::geodesy::{great_circle_distance_km, initial_bearing, normalize_degrees};
pub use api::{Compass, PayloadError, PositionReadout, ViewModel};
pub use processing::{resolve_heading, RawOrientationEvent};
pub use validation::{validate_coordinate, TargetError};
