//! Place search for the SMAPP platform
//!
//! [`SearchClient`] covers popular cities, city search, autocomplete and
//! place details. Every endpoint answers with a `{status, ...}` envelope;
//! a status other than `OK` (any case) is returned as
//! [`SmappError::UpstreamStatus`].

mod client;
mod models;
mod options;

pub use client::SearchClient;
pub use models::{
    City, CityDetail, CityMetadata, Detail, Geometry, LatLng, SearchResult, StructuredFormatting,
    TextLocation,
};
pub use options::{CallOptions, Language, RequestContext, Version};
pub use smapp_core::SmappError;
