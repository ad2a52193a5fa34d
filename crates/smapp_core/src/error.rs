//! SMAPP error types

use thiserror::Error;

/// Errors raised while resolving a [`Config`](crate::Config) or building a client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No API key was supplied
    #[error("api key is required")]
    EmptyApiKey,

    /// The API key source was neither `header` nor `query`
    #[error("api key source is invalid: should be header or query (got {0:?})")]
    InvalidApiKeySource(String),

    /// The base URL or service URL could not be parsed
    #[error("invalid url: {0}")]
    InvalidBaseUrl(String),

    /// The service only supports the legacy `{base}/{service}/{version}` layout
    #[error("path style is not supported by the {0} service")]
    UnsupportedPathStyle(&'static str),

    /// The environment source could not be read
    #[error("failed to load configuration: {0}")]
    Load(String),
}

/// Errors that can occur during SMAPP service calls
#[derive(Debug, Error)]
pub enum SmappError {
    /// Configuration is missing or inconsistent
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Caller-supplied input failed a precondition; no request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The outgoing payload could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The request never produced an HTTP response
    #[error("Transport error: {message}")]
    Transport {
        /// Underlying cause
        message: String,
        /// Whether the client-side deadline elapsed
        timed_out: bool,
    },

    /// The server answered with a non-success HTTP status
    #[error("Unexpected HTTP status: {status}")]
    UnexpectedStatus {
        /// The HTTP status code
        status: u16,
    },

    /// The response body did not match the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// HTTP succeeded but the embedded `status` field was not `OK`
    #[error("Upstream status is not OK: {status:?}")]
    UpstreamStatus {
        /// The status string reported by the service
        status: String,
    },
}

impl SmappError {
    /// Returns true if the request ran out of time
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { timed_out: true, .. })
    }

    /// Returns true if repeating the same call may succeed
    ///
    /// The SDK never retries on its own; this is a hint for callers.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::UnexpectedStatus { status } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub(crate) fn from_reqwest(err: &reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
            timed_out: err.is_timeout(),
        }
    }
}
