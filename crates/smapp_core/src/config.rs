//! Client configuration
//!
//! A [`Config`] is resolved once per process from an API key plus optional
//! [`ConfigOverrides`], either explicitly ([`Config::new_default`]) or from
//! `SMAPP_*` environment variables ([`Config::read_from_environment`]).
//! Once built it is immutable and shared by reference with every service
//! client.

use std::{collections::HashMap, fmt, str::FromStr};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::ConfigError;

/// Default header carrying the API key
pub const DEFAULT_HEADER_API_KEY_NAME: &str = "X-Monshi-Key";

/// Default query parameter carrying the API key
pub const DEFAULT_QUERY_API_KEY_NAME: &str = "monshi_key";

/// Base URL pattern for routes inside the data center network
pub const INTERNAL_BASE_URL_PATTERN: &str = "http://smapp-api.apps.inter-dc.{REGION}.snappcloud.io";

/// Base URL pattern for public routes
pub const PUBLIC_BASE_URL_PATTERN: &str = "http://api.{REGION}.snappmaps.ir/";

/// Region used when none is configured
pub const DEFAULT_REGION: &str = "teh-1";

const REGION_PLACEHOLDER: &str = "{REGION}";

/// Prefix of the environment variables read by [`Config::read_from_environment`]
pub const ENV_PREFIX: &str = "SMAPP";

/// Where the API key is placed on outgoing requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ApiKeySource {
    /// Send the key as an HTTP header
    #[default]
    Header,
    /// Send the key as a query string parameter
    Query,
}

impl ApiKeySource {
    /// Wire name of the source
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Query => "query",
        }
    }

    /// Default key name for this placement
    #[must_use]
    pub const fn default_key_name(self) -> &'static str {
        match self {
            Self::Header => DEFAULT_HEADER_API_KEY_NAME,
            Self::Query => DEFAULT_QUERY_API_KEY_NAME,
        }
    }
}

impl fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiKeySource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" => Ok(Self::Header),
            "query" => Ok(Self::Query),
            other => Err(ConfigError::InvalidApiKeySource(other.to_string())),
        }
    }
}

/// How the base URL should be chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUrl {
    /// Use this URL as is
    Explicit(String),
    /// Substitute the region into [`PUBLIC_BASE_URL_PATTERN`]
    Public,
    /// Substitute the region into [`INTERNAL_BASE_URL_PATTERN`]
    Internal,
}

impl BaseUrl {
    fn resolve(&self, region: &str) -> String {
        match self {
            Self::Explicit(url) => url.clone(),
            Self::Public => PUBLIC_BASE_URL_PATTERN.replace(REGION_PLACEHOLDER, region),
            Self::Internal => INTERNAL_BASE_URL_PATTERN.replace(REGION_PLACEHOLDER, region),
        }
    }
}

/// Optional overrides applied on top of the defaults or the environment
///
/// Every setter overwrites; applying the same setter twice is the same as
/// applying it once. Empty strings count as "not set".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Region substituted into URL patterns
    pub region: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// Raw key source, validated during resolution
    pub api_key_source: Option<String>,
    /// Header or query parameter name for the key
    pub api_key_name: Option<String>,
    /// Base URL choice
    pub base_url: Option<BaseUrl>,
}

impl fmt::Debug for ConfigOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOverrides")
            .field("region", &self.region)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_key_source", &self.api_key_source)
            .field("api_key_name", &self.api_key_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ConfigOverrides {
    /// Create an empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom base URL
    #[must_use]
    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(BaseUrl::Explicit(base_url.into()));
        self
    }

    /// Set the key source (`header` or `query`)
    #[must_use]
    pub fn with_api_key_source(mut self, source: impl Into<String>) -> Self {
        self.api_key_source = Some(source.into());
        self
    }

    /// Set the header or query parameter name for the key
    #[must_use]
    pub fn with_api_key_name(mut self, name: impl Into<String>) -> Self {
        self.api_key_name = Some(name.into());
        self
    }

    /// Use the public routes for the resolved region
    #[must_use]
    pub fn with_public_url(mut self) -> Self {
        self.base_url = Some(BaseUrl::Public);
        self
    }

    /// Use the internal routes for the resolved region
    #[must_use]
    pub fn with_internal_url(mut self) -> Self {
        self.base_url = Some(BaseUrl::Internal);
        self
    }
}

/// Raw `SMAPP_*` values as read by the `config` crate
#[derive(Debug, Default, Deserialize)]
struct EnvSettings {
    api_key: Option<String>,
    api_key_source: Option<String>,
    api_key_name: Option<String>,
    api_region: Option<String>,
    api_base_url: Option<String>,
}

/// Resolved SDK configuration
#[derive(Clone)]
pub struct Config {
    region: String,
    api_key: SecretString,
    api_key_source: ApiKeySource,
    api_key_name: String,
    api_base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("api_key", &"[REDACTED]")
            .field("api_key_source", &self.api_key_source)
            .field("api_key_name", &self.api_key_name)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Config {
    /// Build a config from an explicit API key
    ///
    /// Without a base URL override the internal routes of the resolved
    /// region are used.
    pub fn new_default(
        api_key: impl Into<String>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Self::resolve(Some(api_key), None, None, None, None, overrides, &BaseUrl::Internal)
    }

    /// Build a config from the `SMAPP_*` process environment
    ///
    /// Reads `SMAPP_API_KEY`, `SMAPP_API_KEY_SOURCE`, `SMAPP_API_KEY_NAME`,
    /// `SMAPP_API_REGION` and `SMAPP_API_BASE_URL`. Without a base URL the
    /// public routes of the resolved region are used.
    pub fn read_from_environment(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX), overrides)
    }

    /// Like [`Config::read_from_environment`], but reading from the given map
    /// of `SMAPP_*` variables instead of the process environment
    pub fn from_env_map(
        vars: HashMap<String, String>,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        Self::from_environment(
            config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)),
            overrides,
        )
    }

    fn from_environment(
        source: config::Environment,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let settings: EnvSettings = config::Config::builder()
            .add_source(source)
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        Self::resolve(
            settings.api_key,
            settings.api_key_source,
            settings.api_key_name,
            settings.api_region,
            settings.api_base_url.map(BaseUrl::Explicit),
            overrides,
            &BaseUrl::Public,
        )
    }

    fn resolve(
        api_key: Option<String>,
        api_key_source: Option<String>,
        api_key_name: Option<String>,
        region: Option<String>,
        base_url: Option<BaseUrl>,
        overrides: ConfigOverrides,
        fallback_base_url: &BaseUrl,
    ) -> Result<Self, ConfigError> {
        let api_key =
            non_empty(overrides.api_key.or(api_key)).ok_or(ConfigError::EmptyApiKey)?;

        let api_key_source = non_empty(overrides.api_key_source)
            .or_else(|| non_empty(api_key_source))
            .map_or(Ok(ApiKeySource::default()), |s| s.parse())?;

        let api_key_name = non_empty(overrides.api_key_name)
            .or_else(|| non_empty(api_key_name))
            .unwrap_or_else(|| api_key_source.default_key_name().to_string());

        let region = non_empty(overrides.region)
            .or_else(|| non_empty(region))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let api_base_url = overrides
            .base_url
            .or(base_url)
            .map(|b| b.resolve(&region))
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| fallback_base_url.resolve(&region));

        Ok(Self {
            region,
            api_key: SecretString::from(api_key),
            api_key_source,
            api_key_name,
            api_base_url,
        })
    }

    /// Region the base URL was resolved for
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// API key
    #[must_use]
    pub const fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Key placement
    #[must_use]
    pub const fn api_key_source(&self) -> ApiKeySource {
        self.api_key_source
    }

    /// Header or query parameter name for the key
    #[must_use]
    pub fn api_key_name(&self) -> &str {
        &self.api_key_name
    }

    /// Base URL shared by all services
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Check the config still carries an API key
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn ensure_usable(&self) -> Result<(), ConfigError> {
        if self.api_key.expose_secret().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(())
    }
}
