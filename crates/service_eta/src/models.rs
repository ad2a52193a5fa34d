//! ETA request and response models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A stop on the route
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
    /// Free-form metadata for this stop
    #[serde(rename = "m", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

impl Point {
    /// A point without metadata
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            metadata: None,
        }
    }

    /// Attach metadata to the point
    #[must_use]
    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Payload sent in the `json` query parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EtaRequest<'a> {
    /// Stops in travel order
    pub locations: &'a [Point],
    /// Departure time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_date_time: Option<&'a str>,
    /// Request-level metadata
    #[serde(rename = "m", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<&'a HashMap<String, String>>,
}

/// One leg between two consecutive points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Leg {
    /// Travel time in seconds
    pub time: i64,
    /// Length in meters
    pub length: i64,
}

/// Legs of the trip
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Trip {
    /// Legs in travel order
    pub legs: Vec<Leg>,
}

/// ETA service response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Eta {
    /// Trip
    pub trip: Trip,
}

impl Eta {
    /// Total travel time in seconds
    #[must_use]
    pub fn total_time(&self) -> i64 {
        self.trip.legs.iter().map(|leg| leg.time).sum()
    }

    /// Total length in meters
    #[must_use]
    pub fn total_length(&self) -> i64 {
        self.trip.legs.iter().map(|leg| leg.length).sum()
    }
}
