//! Matrix call options

use std::{collections::HashMap, fmt};

/// Matrix API version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Version {
    /// `v1`
    #[default]
    V1,
    /// `v2`
    V2,
}

impl Version {
    /// Path segment of the version
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

/// Routing engine computing the matrix
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Engine {
    /// `v1`
    #[default]
    V1,
    /// `v2`
    V2,
    /// `ocelot`
    Ocelot,
    /// `orca`
    Orca,
    /// `orca_ch`
    OrcaCh,
    /// Any engine name the service accepts, sent verbatim
    Custom(String),
}

impl Engine {
    /// Wire value of the `engine` query parameter
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::Ocelot => "ocelot",
            Self::Orca => "orca",
            Self::OrcaCh => "orca_ch",
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for Engine {
    /// Known names map to their variant, anything else becomes [`Engine::Custom`]
    fn from(name: &str) -> Self {
        match name {
            "v1" => Self::V1,
            "v2" => Self::V2,
            "ocelot" => Self::Ocelot,
            "orca" => Self::Orca,
            "orca_ch" => Self::OrcaCh,
            other => Self::Custom(other.to_string()),
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
    /// Engine; always sent
    pub engine: Engine,
    /// Send the input as a POST body instead of the `json` query parameter
    pub use_post: bool,
    /// Extra headers, applied after authentication
    pub headers: HashMap<String, String>,
}

impl CallOptions {
    /// Default options: GET mode, engine `v1`
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

    /// Select the engine
    #[must_use]
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Select an engine by name, bypassing the known variants
    #[must_use]
    pub fn with_engine_name(self, name: impl Into<String>) -> Self {
        self.with_engine(Engine::Custom(name.into()))
    }

    /// POST the input as a JSON body; use for matrices too large for a URL
    #[must_use]
    pub const fn with_post(mut self) -> Self {
        self.use_post = true;
        self
    }

    /// Replace the custom headers
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}
