//! ETA call options

use std::{collections::HashMap, fmt};

/// ETA API version
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

/// Routing engine computing the estimate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Engine {
    /// `v1`
    #[default]
    V1,
    /// `v2`
    V2,
}

impl Engine {
    /// Wire value of the `engine` query parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// `no_traffic` query parameter; `None` leaves it out
    pub no_traffic: Option<bool>,
    /// `departure_date_time` field of the payload
    pub departure_date_time: Option<String>,
    /// Engine; always sent
    pub engine: Engine,
    /// Request-level metadata (`m` field of the payload)
    pub metadata: Option<HashMap<String, String>>,
    /// Extra headers, applied after authentication
    pub headers: HashMap<String, String>,
}

impl CallOptions {
    /// Default options (engine `v1`, nothing else set)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore live traffic
    #[must_use]
    pub const fn with_no_traffic(mut self) -> Self {
        self.no_traffic = Some(true);
        self
    }

    /// Explicitly include live traffic (`no_traffic=false`)
    #[must_use]
    pub const fn with_traffic(mut self) -> Self {
        self.no_traffic = Some(false);
        self
    }

    /// Estimate for a departure time, in the format the service expects
    #[must_use]
    pub fn with_departure_date_time(mut self, date_time: impl Into<String>) -> Self {
        self.departure_date_time = Some(date_time.into());
        self
    }

    /// Select the engine
    #[must_use]
    pub const fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Attach request-level metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Replace the custom headers
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}
