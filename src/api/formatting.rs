//! Readout formatting for the presentation layer
//!
//! Fixed precisions match the original display: headings and bearings in
//! whole degrees, distance to one decimal, coordinates to six decimals,
//! accuracy in whole meters, speed to two decimals. Absent or non-finite
//! values render as an em-dash placeholder rather than an error.

use crate::core::types::PositionSample;
use crate::api::types::PositionReadout;

/// Placeholder shown for any readout that is currently unavailable
pub const PLACEHOLDER: &str = "—";

/// Format a heading or bearing in whole degrees.
pub fn whole_degrees(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.0}", v),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Format a distance in kilometers to one decimal.
pub fn distance_km(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.1}", v),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Format one coordinate component to six decimals.
pub fn coordinate_component(value: f64) -> String {
    if value.is_finite() {
        format!("{:.6}", value)
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Format an accuracy radius in whole meters.
pub fn accuracy_m(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.0}", v),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Format a ground speed to two decimals.
///
/// Platforms report NaN speed while stationary; that renders as the
/// placeholder, same as an absent reading.
pub fn speed_mps(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Build the position readouts for a fix, or all placeholders when none
/// exists yet.
pub fn position_readout(position: Option<&PositionSample>) -> PositionReadout {
    match position {
        Some(fix) => PositionReadout {
            latitude: coordinate_component(fix.latitude),
            longitude: coordinate_component(fix.longitude),
            accuracy: accuracy_m(fix.accuracy),
            speed: speed_mps(fix.speed),
        },
        None => PositionReadout {
            latitude: PLACEHOLDER.to_string(),
            longitude: PLACEHOLDER.to_string(),
            accuracy: PLACEHOLDER.to_string(),
            speed: PLACEHOLDER.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_degrees_rounds_and_falls_back() {
        assert_eq!(whole_degrees(Some(89.6)), "90");
        assert_eq!(whole_degrees(Some(0.2)), "0");
        assert_eq!(whole_degrees(None), PLACEHOLDER);
        assert_eq!(whole_degrees(Some(f64::NAN)), PLACEHOLDER);
    }

    #[test]
    fn distance_uses_one_decimal() {
        assert_eq!(distance_km(Some(10007.543)), "10007.5");
        assert_eq!(distance_km(None), PLACEHOLDER);
    }

    #[test]
    fn coordinates_use_six_decimals() {
        assert_eq!(coordinate_component(21.4225), "21.422500");
        assert_eq!(coordinate_component(-0.1), "-0.100000");
    }

    #[test]
    fn nan_speed_renders_placeholder() {
        assert_eq!(speed_mps(Some(f64::NAN)), PLACEHOLDER);
        assert_eq!(speed_mps(Some(1.234)), "1.23");
        assert_eq!(speed_mps(None), PLACEHOLDER);
    }

    #[test]
    fn missing_fix_yields_all_placeholders() {
        let readout = position_readout(None);
        assert_eq!(readout.latitude, PLACEHOLDER);
        assert_eq!(readout.longitude, PLACEHOLDER);
        assert_eq!(readout.accuracy, PLACEHOLDER);
        assert_eq!(readout.speed, PLACEHOLDER);
    }

    #[test]
    fn fix_formats_each_field() {
        let fix = PositionSample {
            latitude: 41.008238,
            longitude: 28.978359,
            accuracy: Some(12.4),
            speed: None,
        };
        let readout = position_readout(Some(&fix));
        assert_eq!(readout.latitude, "41.008238");
        assert_eq!(readout.longitude, "28.978359");
        assert_eq!(readout.accuracy, "12");
        assert_eq!(readout.speed, PLACEHOLDER);
    }
}
