//! Validation of user-entered target coordinates
//!
//! Platform geolocation fixes are trusted as-is; only coordinates typed by
//! the user pass through here. A rejected coordinate surfaces as a
//! [`TargetError`] so the caller can show a validation notice while the
//! previous target stays in effect.

use std::fmt;

/// Errors raised when a user-entered coordinate is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum TargetError {
    NonFiniteLatitude { value: f64 },
    LatitudeOutOfRange { value: f64 },
    NonFiniteLongitude { value: f64 },
    LongitudeOutOfRange { value: f64 },
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetError::NonFiniteLatitude { value } => {
                write!(f, "Latitude is not a finite number: {}", value)
            }
            TargetError::LatitudeOutOfRange { value } => {
                write!(f, "Latitude {} outside [-90, 90]", value)
            }
            TargetError::NonFiniteLongitude { value } => {
                write!(f, "Longitude is not a finite number: {}", value)
            }
            TargetError::LongitudeOutOfRange { value } => {
                write!(f, "Longitude {} outside [-180, 180]", value)
            }
        }
    }
}

impl std::error::Error for TargetError {}

/// Check that a coordinate pair is finite and within geodetic range.
pub fn validate_coordinate(latitude: f64, longitude: f64) -> Result<(), TargetError> {
    if !latitude.is_finite() {
        return Err(TargetError::NonFiniteLatitude { value: latitude });
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(TargetError::LatitudeOutOfRange { value: latitude });
    }
    if !longitude.is_finite() {
        return Err(TargetError::NonFiniteLongitude { value: longitude });
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(TargetError::LongitudeOutOfRange { value: longitude });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_boundaries() {
        assert!(validate_coordinate(90.0, 180.0).is_ok());
        assert!(validate_coordinate(-90.0, -180.0).is_ok());
        assert!(validate_coordinate(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            validate_coordinate(90.001, 0.0),
            Err(TargetError::LatitudeOutOfRange { value: 90.001 })
        );
        assert_eq!(
            validate_coordinate(0.0, -180.5),
            Err(TargetError::LongitudeOutOfRange { value: -180.5 })
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            validate_coordinate(f64::NAN, 0.0),
            Err(TargetError::NonFiniteLatitude { .. })
        ));
        assert!(matches!(
            validate_coordinate(0.0, f64::INFINITY),
            Err(TargetError::NonFiniteLongitude { .. })
        ));
    }

    #[test]
    fn error_messages_carry_the_offending_value() {
        let message = TargetError::LatitudeOutOfRange { value: 91.0 }.to_string();
        assert!(message.contains("91"));
    }
}
