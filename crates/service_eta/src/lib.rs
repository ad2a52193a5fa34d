//! Travel time estimation for the SMAPP platform
//!
//! [`EtaClient::get_eta`] sends an ordered list of at least two
//! [`Point`]s and returns one [`Leg`] per consecutive pair. The payload
//! travels JSON-encoded in the `json` query parameter of a GET request.

mod client;
mod models;
mod options;

pub use client::{EtaClient, MIN_POINTS};
pub use models::{Eta, EtaRequest, Leg, Point, Trip};
pub use options::{CallOptions, Engine, Version};
pub use smapp_core::{PathStyle, SmappError};
