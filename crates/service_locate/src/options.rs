//! Locate call options

use std::collections::HashMap;

/// Locate API version
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

/// Per-call options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Extra headers, applied after authentication
    pub headers: HashMap<String, String>,
}

impl CallOptions {
    /// Options with no custom headers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the custom headers
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}
