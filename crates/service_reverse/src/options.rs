//! Reverse geocoding call options

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

/// Reverse API version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Version {
    /// `v1`
    #[default]
    V1,
}

impl Version {
    /// Path segment of the version
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

/// Audience the address is formatted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Short address suited to drivers
    Driver,
    /// Address suited to passengers
    Passenger,
    /// All available components
    Verbose,
    /// Address suited to bikers
    Biker,
    /// Pickup point wording
    Origin,
    /// Drop-off point wording
    Destination,
    /// Frequent address variants; only valid for single lookups
    Frequent,
}

impl ResponseType {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Passenger => "passenger",
            Self::Verbose => "verbose",
            Self::Biker => "biker",
            Self::Origin => "origin",
            Self::Destination => "destination",
            Self::Frequent => "frequent",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of the returned address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// `fa`
    #[serde(rename = "fa")]
    Farsi,
    /// `en`
    #[serde(rename = "en")]
    English,
    /// `ar`
    #[serde(rename = "ar")]
    Arabic,
    /// `ckb`
    #[serde(rename = "ckb")]
    Kurdish,
}

impl Language {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Farsi => "fa",
            Self::English => "en",
            Self::Arabic => "ar",
            Self::Kurdish => "ckb",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call options; unset values are left out of the request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// `zoom` query parameter; `Some(0)` is sent as `zoom=0`
    pub zoom_level: Option<u32>,
    /// `type` query parameter
    pub response_type: Option<ResponseType>,
    /// `language` query parameter
    pub language: Option<Language>,
    /// Adds `normalize=true`
    pub normalize: bool,
    /// Extra headers, applied after authentication
    pub headers: HashMap<String, String>,
}

impl CallOptions {
    /// Options with nothing set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zoom 16, driver formatting, Farsi
    #[must_use]
    pub fn recommended() -> Self {
        Self::new()
            .with_zoom_level(16)
            .with_response_type(ResponseType::Driver)
            .with_language(Language::Farsi)
    }

    /// Set the zoom level
    #[must_use]
    pub const fn with_zoom_level(mut self, zoom: u32) -> Self {
        self.zoom_level = Some(zoom);
        self
    }

    /// Set the response type
    #[must_use]
    pub const fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = Some(response_type);
        self
    }

    /// Set the response language
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Ask the service to normalize the address
    #[must_use]
    pub const fn with_normalize(mut self) -> Self {
        self.normalize = true;
        self
    }

    /// Replace the custom headers
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}
