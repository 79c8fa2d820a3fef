//! Heading resolution from raw device-orientation events
//!
//! Browsers deliver orientation data in platform-specific shapes: iOS Safari
//! carries a ready-made compass heading, other platforms only expose the
//! alpha Euler angle, with or without an `absolute` flag. Resolution walks an
//! ordered chain of extractors and takes the first field that yields a finite
//! heading; an event where nothing matches resolves to `None` and the caller
//! keeps its previous sample.

use crate::algorithms::geodesy::normalize_degrees;
use crate::core::types::{HeadingSample, HeadingSource};
use serde::Deserialize;

/// Raw device-orientation event as delivered over the browser bridge.
///
/// All fields are optional; real events routinely omit most of them. `beta`
/// and `gamma` are carried for completeness but play no part in heading
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOrientationEvent {
    /// Platform compass heading, degrees clockwise from North (iOS Safari)
    pub webkit_compass_heading: Option<f64>,
    /// Whether alpha is referenced to Earth rather than an arbitrary frame
    pub absolute: bool,
    /// Rotation about the screen normal, degrees counter-clockwise
    pub alpha: Option<f64>,
    /// Front-back tilt, degrees (unused)
    pub beta: Option<f64>,
    /// Left-right tilt, degrees (unused)
    pub gamma: Option<f64>,
}

/// One step of the resolution chain: inspect the event, yield a heading in
/// degrees clockwise from North plus its provenance, or pass.
type Extractor = fn(&RawOrientationEvent) -> Option<(f64, HeadingSource)>;

/// Extractors in strict priority order; first success wins.
const EXTRACTORS: &[Extractor] = &[
    extract_platform_compass,
    extract_absolute_alpha,
    extract_relative_alpha,
];

fn extract_platform_compass(event: &RawOrientationEvent) -> Option<(f64, HeadingSource)> {
    match event.webkit_compass_heading {
        Some(heading) if heading.is_finite() => Some((heading, HeadingSource::Ios)),
        _ => None,
    }
}

fn extract_absolute_alpha(event: &RawOrientationEvent) -> Option<(f64, HeadingSource)> {
    if !event.absolute {
        return None;
    }
    match event.alpha {
        // Alpha increases counter-clockwise; compass headings run clockwise.
        Some(alpha) if alpha.is_finite() => Some((360.0 - alpha, HeadingSource::AbsoluteAlpha)),
        _ => None,
    }
}

fn extract_relative_alpha(event: &RawOrientationEvent) -> Option<(f64, HeadingSource)> {
    match event.alpha {
        Some(alpha) if alpha.is_finite() => Some((360.0 - alpha, HeadingSource::RelativeAlpha)),
        _ => None,
    }
}

/// Resolve a raw orientation event into a normalized heading sample.
///
/// Returns `None` when no usable field is present; the event is ignored
/// rather than treated as an error. A returned sample is always finite and
/// in [0, 360).
pub fn resolve_heading(event: &RawOrientationEvent) -> Option<HeadingSample> {
    EXTRACTORS
        .iter()
        .find_map(|extract| extract(event))
        .map(|(degrees, source)| HeadingSample {
            degrees: normalize_degrees(degrees),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_compass_field_wins_over_alpha() {
        let event = RawOrientationEvent {
            webkit_compass_heading: Some(123.0),
            absolute: true,
            alpha: Some(10.0),
            ..Default::default()
        };
        let sample = resolve_heading(&event).unwrap();
        assert_eq!(sample.degrees, 123.0);
        assert_eq!(sample.source, HeadingSource::Ios);
    }

    #[test]
    fn absolute_alpha_zero_resolves_to_north() {
        let event = RawOrientationEvent {
            absolute: true,
            alpha: Some(0.0),
            ..Default::default()
        };
        let sample = resolve_heading(&event).unwrap();
        assert_eq!(sample.degrees, 0.0);
        assert_eq!(sample.source, HeadingSource::AbsoluteAlpha);
    }

    #[test]
    fn alpha_without_absolute_flag_is_relative() {
        let event = RawOrientationEvent {
            alpha: Some(90.0),
            ..Default::default()
        };
        let sample = resolve_heading(&event).unwrap();
        assert_eq!(sample.degrees, 270.0);
        assert_eq!(sample.source, HeadingSource::RelativeAlpha);
    }

    #[test]
    fn negative_alpha_normalizes_into_range() {
        let event = RawOrientationEvent {
            absolute: true,
            alpha: Some(-30.0),
            ..Default::default()
        };
        let sample = resolve_heading(&event).unwrap();
        assert_eq!(sample.degrees, 30.0);
        assert!((0.0..360.0).contains(&sample.degrees));
    }

    #[test]
    fn empty_event_resolves_to_none() {
        assert_eq!(resolve_heading(&RawOrientationEvent::default()), None);
    }

    #[test]
    fn non_finite_fields_are_skipped_not_propagated() {
        let event = RawOrientationEvent {
            webkit_compass_heading: Some(f64::NAN),
            alpha: Some(45.0),
            ..Default::default()
        };
        // NaN platform field falls through to the relative-alpha extractor
        let sample = resolve_heading(&event).unwrap();
        assert_eq!(sample.degrees, 315.0);
        assert_eq!(sample.source, HeadingSource::RelativeAlpha);

        let all_nan = RawOrientationEvent {
            webkit_compass_heading: Some(f64::NAN),
            absolute: true,
            alpha: Some(f64::INFINITY),
            ..Default::default()
        };
        assert_eq!(resolve_heading(&all_nan), None);
    }

    #[test]
    fn parses_browser_shaped_json() {
        let json = r#"{"alpha": 350.25, "beta": 1.0, "gamma": -2.0, "absolute": true}"#;
        let event: RawOrientationEvent = serde_json::from_str(json).unwrap();
        assert!(event.absolute);
        let sample = resolve_heading(&event).unwrap();
        assert!((sample.degrees - 9.75).abs() < 1e-9);
    }

    #[test]
    fn parses_ios_shaped_json_with_missing_fields() {
        let json = r#"{"webkitCompassHeading": 271.5}"#;
        let event: RawOrientationEvent = serde_json::from_str(json).unwrap();
        let sample = resolve_heading(&event).unwrap();
        assert_eq!(sample.degrees, 271.5);
        assert_eq!(sample.source, HeadingSource::Ios);
    }
}
