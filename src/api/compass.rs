//! Event-driven compass state orchestrator
//!
//! A [`Compass`] exclusively owns the latest heading sample, the latest
//! position fix, and the selected target. Sensor events arrive as
//! independent, arbitrarily interleaved updates; each handler runs to
//! completion and replaces the relevant sample, so no locking is needed.
//! Every accepted update triggers a full, synchronous view-model
//! recomputation; there is no incremental state to go stale.

use crate::algorithms::geodesy::{great_circle_distance_km, initial_bearing, normalize_degrees};
use crate::api::formatting::{self, PLACEHOLDER};
use crate::api::types::{PayloadError, ViewModel};
use crate::core::types::{HeadingSample, HeadingSource, PositionSample, Target};
use crate::processing::orientation::{resolve_heading, RawOrientationEvent};
use crate::validation::target::{validate_coordinate, TargetError};

/// Callback invoked with the fresh view model after every recomputation
pub type ViewModelCallback = Box<dyn Fn(&ViewModel)>;

/// Compass state orchestrator
pub struct Compass {
    heading: Option<HeadingSample>,
    position: Option<PositionSample>,
    target: Target,
    prefer_true_north: bool,
    on_update: Option<ViewModelCallback>,
}

impl Default for Compass {
    fn default() -> Self {
        Self::new()
    }
}

impl Compass {
    /// Create an orchestrator with no sensor data and the North target.
    pub fn new() -> Self {
        Self {
            heading: None,
            position: None,
            target: Target::North,
            prefer_true_north: false,
            on_update: None,
        }
    }

    /// Register a callback invoked after every accepted update.
    pub fn set_update_callback(&mut self, callback: ViewModelCallback) {
        self.on_update = Some(callback);
    }

    /// Latest resolved heading, if any orientation event has been usable.
    pub fn heading(&self) -> Option<HeadingSample> {
        self.heading
    }

    /// Latest position fix, if any has arrived.
    pub fn position(&self) -> Option<PositionSample> {
        self.position
    }

    /// Currently selected target.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Feed one raw orientation event.
    ///
    /// Events carrying no usable heading field are ignored; the previous
    /// sample and its provenance stay in effect.
    pub fn on_orientation_event(&mut self, event: &RawOrientationEvent) {
        if let Some(sample) = resolve_heading(event) {
            self.heading = Some(sample);
            self.notify();
        }
    }

    /// Feed one orientation event as JSON from the browser bridge.
    pub fn on_orientation_json(&mut self, payload: &str) -> Result<(), PayloadError> {
        let event: RawOrientationEvent = serde_json::from_str(payload)?;
        self.on_orientation_event(&event);
        Ok(())
    }

    /// Feed one geolocation fix. Fixes come from the platform geolocation
    /// API and are trusted as-is.
    pub fn on_position_update(&mut self, sample: PositionSample) {
        self.position = Some(sample);
        self.notify();
    }

    /// Feed one geolocation fix as JSON from the browser bridge.
    pub fn on_position_json(&mut self, payload: &str) -> Result<(), PayloadError> {
        let sample: PositionSample = serde_json::from_str(payload)?;
        self.on_position_update(sample);
        Ok(())
    }

    /// Select a new target.
    ///
    /// Coordinate targets are validated; on rejection the previous target
    /// stays selected and the error is returned for user-facing display.
    pub fn set_target(&mut self, target: Target) -> Result<(), TargetError> {
        if let Some(coordinate) = target.coordinate() {
            validate_coordinate(coordinate.latitude, coordinate.longitude)?;
        }
        self.target = target;
        self.notify();
        Ok(())
    }

    /// Toggle the true-north display preference.
    ///
    /// Label-only: the heading value is never corrected for magnetic
    /// declination. Preserved from the source behavior as a documented
    /// approximation.
    pub fn set_true_north_preference(&mut self, prefer_true_north: bool) {
        self.prefer_true_north = prefer_true_north;
        self.notify();
    }

    /// Derive the render-ready view model from the current state.
    pub fn view_model(&self) -> ViewModel {
        let (bearing, distance) = self.bearing_and_distance();

        // An undefined bearing steers the needle to 0, matching the
        // original renderer.
        let bearing_for_needle = bearing.unwrap_or(0.0);

        let (heading_display, heading_source_label, north_needle_deg, target_needle_deg) =
            match self.heading {
                Some(sample) => (
                    formatting::whole_degrees(Some(sample.degrees)),
                    format!("source: {}", sample.source.label(self.prefer_true_north)),
                    // Counter-rotate so the North needle keeps pointing
                    // North on screen as the device turns.
                    -sample.degrees,
                    normalize_degrees(bearing_for_needle - sample.degrees),
                ),
                None => (
                    PLACEHOLDER.to_string(),
                    format!("source: {}", HeadingSource::Unknown.label(self.prefer_true_north)),
                    0.0,
                    // No heading: fall back to the absolute bearing from
                    // North. Distinguishable because the heading display is
                    // the placeholder.
                    bearing_for_needle,
                ),
            };

        ViewModel {
            heading_display,
            heading_source_label,
            position: formatting::position_readout(self.position.as_ref()),
            target_label: self.target.name().to_string(),
            bearing_degrees: bearing,
            distance_km: distance,
            bearing_display: formatting::whole_degrees(bearing),
            distance_display: formatting::distance_km(distance),
            north_needle_deg,
            target_needle_deg,
        }
    }

    fn bearing_and_distance(&self) -> (Option<f64>, Option<f64>) {
        match (&self.target, self.position) {
            // North is bearing 0 by definition; distance is meaningless.
            (Target::North, _) => (Some(0.0), None),
            (Target::NamedCoordinate { coordinate, .. }, Some(fix)) => (
                Some(initial_bearing(
                    fix.latitude,
                    fix.longitude,
                    coordinate.latitude,
                    coordinate.longitude,
                )),
                Some(great_circle_distance_km(
                    fix.latitude,
                    fix.longitude,
                    coordinate.latitude,
                    coordinate.longitude,
                )),
            ),
            (Target::NamedCoordinate { .. }, None) => (None, None),
        }
    }

    fn notify(&self) {
        if let Some(callback) = &self.on_update {
            callback(&self.view_model());
        }
    }
}
