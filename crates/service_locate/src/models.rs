//! Locate request and response models

use serde::{Deserialize, Serialize};
use smapp_core::GeoPoint;

/// Payload sent in the `json` query parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocateRequest<'a> {
    /// Points to snap
    pub locations: &'a [GeoPoint],
}

/// A candidate position on the road network
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnappedPoint {
    /// Snapped coordinate
    pub point: GeoPoint,
}

/// Snapping result for one input point
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocateResult {
    /// The point as it was sent
    pub input: GeoPoint,
    /// Candidates, possibly empty when nothing was near enough
    pub snapped_points: Vec<SnappedPoint>,
}

impl LocateResult {
    /// First candidate, if any
    #[must_use]
    pub fn best(&self) -> Option<GeoPoint> {
        self.snapped_points.first().map(|snapped| snapped.point)
    }
}
