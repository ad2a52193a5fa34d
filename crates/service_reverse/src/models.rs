//! Reverse geocoding request and response models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::options::{Language, ResponseType};

/// One typed part of an address, e.g. a street or a city
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Component {
    /// Human-readable name
    #[serde(default)]
    pub name: String,
    /// Upstream type tag, e.g. `city` or `primary`
    #[serde(rename = "type", default)]
    pub component_type: String,
}

impl Component {
    /// Create a component
    #[must_use]
    pub fn new(name: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component_type: component_type.into(),
        }
    }
}

/// `result` payload of a component lookup
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Components {
    /// Address components, most specific first
    #[serde(default)]
    pub components: Vec<Component>,
}

/// `result` payload of a display-name lookup
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DisplayName {
    /// Formatted address
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

/// Frequent-address variants
///
/// The set of variants (short/long, per language) changes between
/// upstream releases, so every field is kept as returned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrequentAddress {
    /// Raw fields keyed by their upstream name
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl FrequentAddress {
    /// String value of a field
    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(serde_json::Value::as_str)
    }

    /// Returns true if the service returned no variants
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One lookup inside a batch request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItem {
    /// Caller-chosen id echoed back in the result
    pub id: i64,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
    /// Response formatting
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    /// Response language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Zoom level
    #[serde(rename = "zoom", skip_serializing_if = "Option::is_none")]
    pub zoom_level: Option<u32>,
    /// Request a display name instead of components
    pub display: bool,
}

impl BatchItem {
    /// A component lookup with no optional settings
    #[must_use]
    pub const fn new(id: i64, lat: f64, lon: f64) -> Self {
        Self {
            id,
            lat,
            lon,
            response_type: None,
            language: None,
            zoom_level: None,
            display: false,
        }
    }

    /// Set the response type
    #[must_use]
    pub const fn with_response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = Some(response_type);
        self
    }

    /// Set the language
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the zoom level
    #[must_use]
    pub const fn with_zoom_level(mut self, zoom: u32) -> Self {
        self.zoom_level = Some(zoom);
        self
    }

    /// Request a display name
    #[must_use]
    pub const fn with_display(mut self) -> Self {
        self.display = true;
        self
    }
}

/// Body of a batch request
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BatchRequest {
    /// Lookups to perform
    pub requests: Vec<BatchItem>,
}

impl BatchRequest {
    /// Wrap a list of lookups
    #[must_use]
    pub const fn new(requests: Vec<BatchItem>) -> Self {
        Self { requests }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Components of one batch item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BatchResult {
    /// Id of the originating [`BatchItem`]
    pub id: i64,
    /// Decoded components
    #[serde(default)]
    pub result: Components,
}

/// Display name of one batch item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BatchDisplayNameResult {
    /// Id of the originating [`BatchItem`]
    pub id: i64,
    /// Decoded display name
    #[serde(default)]
    pub result: DisplayName,
}
