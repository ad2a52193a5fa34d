//! Area gateways response models

use serde::{Deserialize, Serialize};

/// An entrance of an area
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Gate {
    /// Display name
    pub name: String,
    /// Geometry type, usually `Point`
    #[serde(rename = "type")]
    pub gate_type: String,
    /// `[lon, lat]`
    pub coordinates: Vec<f64>,
}

impl Gate {
    /// Longitude and latitude of a point gate
    #[must_use]
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        match self.coordinates.as_slice() {
            [lon, lat] => Some((*lon, *lat)),
            _ => None,
        }
    }
}

/// A polygon with its gates
///
/// The service answers with an empty area when no polygon contains the
/// requested point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Area {
    /// Area identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Geometry type, usually `Polygon`
    #[serde(rename = "type")]
    pub area_type: String,
    /// Rings of `[lon, lat]` pairs
    pub coordinates: Vec<Vec<Vec<f64>>>,
    /// Gates of the area
    pub gates: Vec<Gate>,
}

impl Area {
    /// True when no area matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.coordinates.is_empty() && self.gates.is_empty()
    }
}
