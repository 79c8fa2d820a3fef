//! Common API types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Render-ready snapshot of the compass state.
///
/// Derived in full on every state change; nothing in it is cached. The
/// presentation layer only ever reads this structure and never mutates core
/// state directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    /// Heading readout, whole degrees, or the placeholder when unknown
    pub heading_display: String,
    /// Provenance label for the heading source
    pub heading_source_label: String,
    /// Position readouts
    pub position: PositionReadout,
    /// Display name of the selected target
    pub target_label: String,
    /// Bearing toward the target, degrees clockwise from North; `None` when
    /// the target has a coordinate but no position fix exists yet
    pub bearing_degrees: Option<f64>,
    /// Great-circle distance to the target in kilometers; `None` for the
    /// North target or when no position fix exists
    pub distance_km: Option<f64>,
    /// Bearing readout, whole degrees, or the placeholder
    pub bearing_display: String,
    /// Distance readout, one decimal, or the placeholder
    pub distance_display: String,
    /// Screen rotation of the North needle, degrees
    pub north_needle_deg: f64,
    /// Screen rotation of the target needle, degrees
    pub target_needle_deg: f64,
}

impl ViewModel {
    /// Serialize for the presentation bridge.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Formatted position readouts for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionReadout {
    /// Latitude to six decimals, or the placeholder
    pub latitude: String,
    /// Longitude to six decimals, or the placeholder
    pub longitude: String,
    /// Accuracy radius in whole meters, or the placeholder
    pub accuracy: String,
    /// Speed in m/s to two decimals, or the placeholder
    pub speed: String,
}

/// Errors raised when a bridge payload cannot be decoded
#[derive(Debug)]
pub enum PayloadError {
    /// The payload was not valid JSON for the expected shape
    Malformed { source: serde_json::Error },
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::Malformed { source } => {
                write!(f, "Malformed sensor payload: {}", source)
            }
        }
    }
}

impl std::error::Error for PayloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PayloadError::Malformed { source } => Some(source),
        }
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(source: serde_json::Error) -> Self {
        PayloadError::Malformed { source }
    }
}
