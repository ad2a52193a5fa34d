//! Reverse geocoding for the SMAPP platform
//!
//! [`ReverseClient`] resolves coordinates into addresses:
//!
//! - [`ReverseClient::get_components`] returns the raw typed components
//! - [`ReverseClient::get_display_name`] returns one formatted string
//! - [`ReverseClient::get_frequent`] returns frequent-address variants
//! - [`ReverseClient::get_batch`] and [`ReverseClient::get_batch_display_name`]
//!   resolve many points in one POST
//! - the `*structural*` methods sort components into administrative levels
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use service_reverse::{CallOptions, ReverseClient, Version};
//! use smapp_core::{ClientOptions, Config, ConfigOverrides};
//!
//! let config = Config::read_from_environment(ConfigOverrides::new())?;
//! let client = ReverseClient::new(&config, Version::V1, Duration::from_secs(5), ClientOptions::new())?;
//! let name = client
//!     .get_display_name(35.7743, 51.4181, &CallOptions::recommended())
//!     .await?;
//! ```

mod client;
mod models;
mod options;
mod structural;

pub use client::ReverseClient;
pub use models::{
    BatchDisplayNameResult, BatchItem, BatchRequest, BatchResult, Component, Components,
    DisplayName, FrequentAddress,
};
pub use options::{CallOptions, Language, ResponseType, Version};
pub use smapp_core::SmappError;
pub use structural::{StructuralComponent, StructuralResult};
