//! Area gateways for the SMAPP platform
//!
//! [`AreaGatewaysClient::get_gateways`] returns the polygon enclosing a
//! point (a hospital, an airport, a campus) together with its named
//! entrances.

mod client;
mod models;
mod options;

pub use client::AreaGatewaysClient;
pub use models::{Area, Gate};
pub use options::{CallOptions, Language, Version};
pub use smapp_core::SmappError;
