//! Search call options

use std::{collections::HashMap, fmt};

use smapp_core::GeoPoint;

/// Search API version
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

/// Response language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// `en`
    English,
    /// `fa`
    Farsi,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::English => "en",
            Self::Farsi => "fa",
        })
    }
}

/// Where in the ride flow the search happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestContext {
    /// `origin`
    Origin,
    /// `favourite`
    Favourite,
    /// `destination1`
    FirstDestination,
    /// `destination2`
    SecondDestination,
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Origin => "origin",
            Self::Favourite => "favourite",
            Self::FirstDestination => "destination1",
            Self::SecondDestination => "destination2",
        })
    }
}

/// Per-call options; unset values are left out of the request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    /// Point the search is centred on (`location`)
    pub location: Option<GeoPoint>,
    /// Where the user is, used for distance biasing (`user_location`)
    pub user_location: Option<GeoPoint>,
    /// `language`
    pub language: Option<Language>,
    /// `context`
    pub request_context: Option<RequestContext>,
    /// `city_id`
    pub city_id: Option<i64>,
    /// Extra headers, applied after authentication
    pub headers: HashMap<String, String>,
}

impl CallOptions {
    /// Options with nothing set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Centre the search on a point
    #[must_use]
    pub const fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.location = Some(GeoPoint::new(lat, lon));
        self
    }

    /// Bias results by the user's position
    #[must_use]
    pub const fn with_user_location(mut self, lat: f64, lon: f64) -> Self {
        self.user_location = Some(GeoPoint::new(lat, lon));
        self
    }

    /// Set the response language
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the request context
    #[must_use]
    pub const fn with_request_context(mut self, context: RequestContext) -> Self {
        self.request_context = Some(context);
        self
    }

    /// Restrict results to a city
    #[must_use]
    pub const fn with_city_id(mut self, city_id: i64) -> Self {
        self.city_id = Some(city_id);
        self
    }

    /// Replace the custom headers
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}
