//! Search response models
//!
//! Fields missing from a response decode to their defaults.

use serde::{Deserialize, Serialize};

/// Coordinates as returned by the search service (decimal strings)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLocation {
    /// Latitude
    pub latitude: String,
    /// Longitude
    pub longitude: String,
}

impl TextLocation {
    /// Parse both coordinates as numbers
    #[must_use]
    pub fn parse(&self) -> Option<(f64, f64)> {
        Some((self.latitude.parse().ok()?, self.longitude.parse().ok()?))
    }
}

/// Identifiers attached to a city candidate
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CityDetail {
    /// City id, usable as `city_id` in later searches
    pub city_id: i64,
    /// District id
    pub district_id: i64,
    /// Hexagon id
    pub hexagon_id: i64,
}

/// `metadata` of a city candidate
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CityMetadata {
    /// Identifiers
    pub city_detail: CityDetail,
}

/// City candidate returned by city listing and city search
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    /// Id
    pub id: i64,
    /// Name
    pub name: String,
    /// Centre point
    pub centroid: TextLocation,
    /// Description
    pub description: String,
    /// Metadata
    pub metadata: CityMetadata,
}

/// Main and secondary lines of a result
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredFormatting {
    /// Primary line
    pub main_text: String,
    /// Secondary line
    pub secondary_text: String,
}

/// Autocomplete candidate
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    /// Place id, usable with `details`
    pub place_id: String,
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    /// Display lines
    pub structured_formatting: StructuredFormatting,
    /// Primary tag, e.g. `highway:primary`
    #[serde(rename = "type")]
    pub result_type: String,
    /// Position
    pub location: TextLocation,
    /// Distance from the user location in meters
    pub distance: f64,
    /// Length or area of the feature
    pub area_length: f64,
    /// All tags of the feature
    pub all_tags: Vec<String>,
}

/// Numeric position inside [`Geometry`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LatLng {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

/// Geometry of a place
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Position
    pub location: LatLng,
}

/// Details of a place id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Detail {
    /// Name
    pub name: String,
    /// Geometry
    pub geometry: Geometry,
}
