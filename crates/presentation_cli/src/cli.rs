//! Command-line arguments

use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use smapp_core::{ConfigOverrides, GeoPoint, PathStyle};

/// SMAPP CLI
#[derive(Debug, Parser)]
#[command(name = "smapp-cli")]
#[command(author, version, about = "Query the SMAPP mapping services", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// API key; overrides SMAPP_API_KEY
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Region substituted into the base URL; overrides SMAPP_API_REGION
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Base URL of the services; overrides SMAPP_API_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = 10_000, global = true)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Configuration overrides from the global flags
    pub fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if let Some(key) = &self.api_key {
            overrides = overrides.with_api_key(key.as_str());
        }
        if let Some(region) = &self.region {
            overrides = overrides.with_region(region.as_str());
        }
        if let Some(url) = &self.base_url {
            overrides = overrides.with_api_base_url(url.as_str());
        }
        overrides
    }

    /// Per-request timeout
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reverse geocode a point given as lat,lon
    Reverse {
        /// Point as lat,lon; options go before it
        #[arg(allow_hyphen_values = true)]
        point: GeoPoint,

        /// Print the formatted address instead of components
        #[arg(long = "display", conflicts_with = "structural")]
        display_name: bool,

        /// Sort components into administrative levels
        #[arg(long)]
        structural: bool,

        /// Response language
        #[arg(long, value_enum)]
        language: Option<ReverseLanguage>,

        /// Audience the address is formatted for
        #[arg(long = "type", value_enum)]
        response_type: Option<ReverseType>,

        /// Zoom level
        #[arg(long)]
        zoom: Option<u32>,
    },

    /// Search places and cities
    Search {
        #[command(subcommand)]
        command: SearchCommands,
    },

    /// Travel time along two or more points
    Eta {
        /// Points as lat,lon in travel order; options go before them
        #[arg(required = true, num_args = 2.., allow_hyphen_values = true)]
        points: Vec<GeoPoint>,

        /// Routing engine
        #[arg(long, value_enum, default_value_t = EtaEngine::V1)]
        engine: EtaEngine,

        /// Ignore live traffic
        #[arg(long)]
        no_traffic: bool,

        /// Departure date-time, passed through as given
        #[arg(long)]
        departure: Option<String>,

        #[command(flatten)]
        path: PathArgs,
    },

    /// Travel time and distance from every source to every target
    Matrix {
        /// Origin as lat,lon; repeat for more
        #[arg(long = "source", required = true, allow_hyphen_values = true)]
        sources: Vec<GeoPoint>,

        /// Destination as lat,lon; repeat for more
        #[arg(long = "target", required = true, allow_hyphen_values = true)]
        targets: Vec<GeoPoint>,

        /// Engine name (v1, v2, ocelot, orca, orca_ch or any other the service accepts)
        #[arg(long, default_value = "v1")]
        engine: String,

        /// Use version 2 of the matrix API
        #[arg(long)]
        v2: bool,

        /// Ignore live traffic
        #[arg(long)]
        no_traffic: bool,

        /// Send the input as a POST body
        #[arg(long)]
        post: bool,

        #[command(flatten)]
        path: PathArgs,
    },

    /// Snap points to the road network
    Locate {
        /// Points as lat,lon; options go before them
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<GeoPoint>,
    },

    /// Area and gates around a point
    Gateways {
        /// Point as lat,lon; options go before it
        #[arg(allow_hyphen_values = true)]
        point: GeoPoint,

        /// Response language
        #[arg(long, value_enum)]
        language: Option<GatewaysLanguage>,
    },
}

#[derive(Debug, Subcommand)]
pub enum SearchCommands {
    /// List supported cities
    Cities {
        #[command(flatten)]
        scope: SearchScope,
    },

    /// Find cities by name
    City {
        /// Text to search for
        input: String,

        #[command(flatten)]
        scope: SearchScope,
    },

    /// Autocomplete a place query
    Autocomplete {
        /// Text typed so far
        input: String,

        /// Where the user currently is, as lat,lon
        #[arg(long, allow_hyphen_values = true)]
        user_location: Option<GeoPoint>,

        /// Restrict to a city
        #[arg(long)]
        city_id: Option<i64>,

        #[command(flatten)]
        scope: SearchScope,
    },

    /// Details of a place returned by autocomplete
    Details {
        /// Place identifier
        place_id: String,

        #[command(flatten)]
        scope: SearchScope,
    },
}

/// Options shared by the search subcommands
#[derive(Debug, Clone, Args)]
pub struct SearchScope {
    /// Search near this point, as lat,lon
    #[arg(long, allow_hyphen_values = true)]
    pub location: Option<GeoPoint>,

    /// Response language
    #[arg(long, value_enum)]
    pub language: Option<SearchLanguage>,
}

/// Path layout for services that support both
#[derive(Debug, Clone, Copy, Args)]
pub struct PathArgs {
    /// Use `{base}/api/{version}/{service}` instead of `{base}/{service}/{version}`
    #[arg(long)]
    pub api_path: bool,
}

impl PathArgs {
    pub const fn style(self) -> PathStyle {
        if self.api_path {
            PathStyle::Api
        } else {
            PathStyle::Legacy
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReverseLanguage {
    Fa,
    En,
    Ar,
    Ckb,
}

impl From<ReverseLanguage> for service_reverse::Language {
    fn from(language: ReverseLanguage) -> Self {
        match language {
            ReverseLanguage::Fa => Self::Farsi,
            ReverseLanguage::En => Self::English,
            ReverseLanguage::Ar => Self::Arabic,
            ReverseLanguage::Ckb => Self::Kurdish,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReverseType {
    Driver,
    Passenger,
    Verbose,
    Biker,
    Origin,
    Destination,
}

impl From<ReverseType> for service_reverse::ResponseType {
    fn from(response_type: ReverseType) -> Self {
        match response_type {
            ReverseType::Driver => Self::Driver,
            ReverseType::Passenger => Self::Passenger,
            ReverseType::Verbose => Self::Verbose,
            ReverseType::Biker => Self::Biker,
            ReverseType::Origin => Self::Origin,
            ReverseType::Destination => Self::Destination,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchLanguage {
    Fa,
    En,
}

impl From<SearchLanguage> for service_search::Language {
    fn from(language: SearchLanguage) -> Self {
        match language {
            SearchLanguage::Fa => Self::Farsi,
            SearchLanguage::En => Self::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EtaEngine {
    V1,
    V2,
}

impl From<EtaEngine> for service_eta::Engine {
    fn from(engine: EtaEngine) -> Self {
        match engine {
            EtaEngine::V1 => Self::V1,
            EtaEngine::V2 => Self::V2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GatewaysLanguage {
    Fa,
    En,
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
