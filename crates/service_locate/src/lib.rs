//! Point snapping for the SMAPP platform
//!
//! [`LocateClient::locate_points`] snaps raw coordinates (GPS fixes,
//! user taps) to the nearest positions on the road network.

mod client;
mod models;
mod options;

pub use client::LocateClient;
pub use models::{LocateRequest, LocateResult, SnappedPoint};
pub use options::{CallOptions, Version};
pub use smapp_core::{GeoPoint, SmappError};
