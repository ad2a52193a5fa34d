//! Area gateways call options

use std::{collections::HashMap, fmt};

/// Area gateways API version
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

/// Language of area and gate names, sent as `Accept-Language`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// `fa`
    #[default]
    Farsi,
    /// `en`
    English,
}

impl Language {
    /// Header value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Farsi => "fa",
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Response language; `None` sends no `Accept-Language` header
    pub language: Option<Language>,
    /// Extra headers, applied after authentication
    pub headers: HashMap<String, String>,
}

impl CallOptions {
    /// Options with no language preference
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names in Farsi
    #[must_use]
    pub const fn with_farsi_language(mut self) -> Self {
        self.language = Some(Language::Farsi);
        self
    }

    /// Names in English
    #[must_use]
    pub const fn with_english_language(mut self) -> Self {
        self.language = Some(Language::English);
        self
    }

    /// Replace the custom headers
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}
