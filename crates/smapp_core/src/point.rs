//! Geographic point shared by the service clients

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SmappError;

/// A WGS84 coordinate as sent to and returned by the SMAPP services
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point without range checks
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check latitude is within [-90, 90] and longitude within [-180, 180]
    pub fn validate(&self) -> Result<(), SmappError> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(SmappError::InvalidInput(format!(
                "latitude must be between -90 and 90, got {}",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(SmappError::InvalidInput(format!(
                "longitude must be between -180 and 180, got {}",
                self.lon
            )));
        }
        Ok(())
    }
}

/// Six-decimal rendering used for coordinates in query strings
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    format!("{value:.6}")
}

impl fmt::Display for GeoPoint {
    /// Formats as `lat,lon`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lon)
    }
}

impl FromStr for GeoPoint {
    type Err = SmappError;

    /// Parses `lat,lon`; whitespace around either number is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| SmappError::InvalidInput(format!("expected lat,lon, got {s:?}")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| SmappError::InvalidInput(format!("invalid coordinate {part:?}: {e}")))
        };
        Ok(Self::new(parse(lat)?, parse(lon)?))
    }
}
