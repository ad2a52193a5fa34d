//! Distance matrix for the SMAPP platform
//!
//! [`MatrixClient::get_matrix`] estimates travel time and distance from
//! every source to every target. Small matrices go out as a GET with the
//! input JSON-encoded in the `json` query parameter; set
//! [`CallOptions::with_post`] to send large ones as a POST body instead.

mod client;
mod models;
mod options;

pub use client::MatrixClient;
pub use models::{Cell, Input, Output};
pub use options::{CallOptions, Engine, Version};
pub use smapp_core::{GeoPoint, PathStyle, SmappError};
