//! Matrix request and response models

use serde::{Deserialize, Serialize};
use smapp_core::GeoPoint;

/// Sources and targets of a matrix request
///
/// The same shape is used for the `json` query parameter and the POST body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Input<'a> {
    /// Origins, one output row each
    pub sources: &'a [GeoPoint],
    /// Destinations, one output column each
    pub targets: &'a [GeoPoint],
}

/// One source/target pair of the matrix
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    /// Distance in meters
    pub distance: i64,
    /// Travel time in seconds
    pub time: i64,
    /// Index into the sources
    pub from_index: usize,
    /// Index into the targets
    pub to_index: usize,
    /// Per-cell outcome, e.g. `Success`
    pub status: String,
}

impl Cell {
    /// Whether the service reported success for this pair
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

/// Matrix service response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    /// `sources_to_targets[i][j]` is the trip from source `i` to target `j`
    pub sources_to_targets: Vec<Vec<Cell>>,
}

impl Output {
    /// Cell for a source/target pair, if present
    #[must_use]
    pub fn get(&self, source: usize, target: usize) -> Option<&Cell> {
        self.sources_to_targets.get(source)?.get(target)
    }

    /// Cells whose status is not a success
    pub fn failed_cells(&self) -> impl Iterator<Item = &Cell> {
        self.sources_to_targets
            .iter()
            .flatten()
            .filter(|cell| !cell.is_success())
    }
}
