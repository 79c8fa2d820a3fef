//! Core data types for the compass system

use crate::core::constants::KAABA;
use crate::validation::target::{validate_coordinate, TargetError};
use serde::{Deserialize, Serialize};

/// Geodetic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Which sensor field / policy branch produced the current heading value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingSource {
    /// Platform compass-heading field (iOS Safari)
    Ios,
    /// Alpha angle with the absolute flag set
    AbsoluteAlpha,
    /// Alpha angle without the absolute flag, lower confidence
    RelativeAlpha,
    /// No heading resolved yet
    Unknown,
}

impl HeadingSource {
    /// User-facing provenance label.
    ///
    /// The true-north preference only changes the label on the platform
    /// compass source; no magnetic declination correction is applied to the
    /// heading value itself. This mirrors the device behavior, where the
    /// platform field may already be true or magnetic depending on hardware.
    pub fn label(&self, prefer_true_north: bool) -> &'static str {
        match self {
            HeadingSource::Ios if prefer_true_north => "iOS (approx true)",
            HeadingSource::Ios => "iOS",
            HeadingSource::AbsoluteAlpha => "Absolute alpha",
            HeadingSource::RelativeAlpha => "Alpha (relative)",
            HeadingSource::Unknown => "—",
        }
    }
}

/// Resolved compass heading, degrees clockwise from North in [0, 360)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingSample {
    pub degrees: f64,
    pub source: HeadingSource,
}

/// Latest geolocation fix from the platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSample {
    pub latitude: f64,
    pub longitude: f64,
    /// Horizontal accuracy radius in meters, when the platform reports one
    #[serde(default)]
    pub accuracy: Option<f64>,
    /// Ground speed in meters per second, when the platform reports one
    #[serde(default)]
    pub speed: Option<f64>,
}

impl PositionSample {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Bearing target selected by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Target {
    /// True North; bearing is defined as 0 and distance is undefined
    North,
    /// A named coordinate, covering both the built-in Qibla target and
    /// user-entered custom targets
    NamedCoordinate {
        name: String,
        coordinate: Coordinate,
    },
}

impl Target {
    /// Built-in Qibla target at the Kaaba coordinate.
    pub fn qibla() -> Self {
        Target::NamedCoordinate {
            name: "Qibla".to_string(),
            coordinate: KAABA,
        }
    }

    /// User-entered custom target. The coordinate is validated up front so a
    /// rejected entry never replaces the current target.
    pub fn custom(latitude: f64, longitude: f64) -> Result<Self, TargetError> {
        validate_coordinate(latitude, longitude)?;
        Ok(Target::NamedCoordinate {
            name: format!("Custom ({:.3}, {:.3})", latitude, longitude),
            coordinate: Coordinate::new(latitude, longitude),
        })
    }

    /// Display name of the target
    pub fn name(&self) -> &str {
        match self {
            Target::North => "North",
            Target::NamedCoordinate { name, .. } => name,
        }
    }

    /// Coordinate of the target, if it has one
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Target::North => None,
            Target::NamedCoordinate { coordinate, .. } => Some(*coordinate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qibla_target_uses_kaaba_coordinate() {
        let target = Target::qibla();
        assert_eq!(target.name(), "Qibla");
        let coord = target.coordinate().unwrap();
        assert_eq!(coord.latitude, 21.4225);
        assert_eq!(coord.longitude, 39.8262);
    }

    #[test]
    fn custom_target_formats_name_to_three_decimals() {
        let target = Target::custom(48.85837, 2.294481).unwrap();
        assert_eq!(target.name(), "Custom (48.858, 2.294)");
    }

    #[test]
    fn custom_target_rejects_out_of_range_latitude() {
        assert!(Target::custom(91.0, 0.0).is_err());
        assert!(Target::custom(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn source_label_true_north_toggle_is_label_only() {
        assert_eq!(HeadingSource::Ios.label(false), "iOS");
        assert_eq!(HeadingSource::Ios.label(true), "iOS (approx true)");
        // Non-platform sources ignore the toggle
        assert_eq!(HeadingSource::AbsoluteAlpha.label(true), "Absolute alpha");
        assert_eq!(HeadingSource::RelativeAlpha.label(true), "Alpha (relative)");
    }

    #[test]
    fn position_sample_parses_browser_json() {
        let json = r#"{"latitude": 41.0, "longitude": 29.0, "accuracy": 12.5}"#;
        let sample: PositionSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.latitude, 41.0);
        assert_eq!(sample.accuracy, Some(12.5));
        assert_eq!(sample.speed, None);
    }
}
