//! Shared building blocks for the SMAPP service clients
//!
//! Provides configuration resolution, the common error type, the
//! request pipeline and the HTTP transport seam used by every service
//! crate (`service_reverse`, `service_search`, `service_eta`,
//! `service_matrix`, `service_locate`, `service_area_gateways`).

pub mod client;
pub mod config;
pub mod error;
pub mod point;
pub mod request;
pub mod transport;
pub mod version;

pub use client::{
    ClientOptions, Endpoint, OK_STATUS, PathStyle, ResponseShape, ServiceClient, decode_body,
};
pub use config::{ApiKeySource, BaseUrl, Config, ConfigOverrides};
pub use error::{ConfigError, SmappError};
pub use point::{GeoPoint, format_coordinate};
pub use request::ApiRequest;
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
