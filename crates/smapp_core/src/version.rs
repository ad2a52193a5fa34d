//! SDK identification

/// Version of this SDK
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client identification string attached to every request
#[must_use]
pub const fn user_agent() -> &'static str {
    concat!("smapp-sdk-rust/v", env!("CARGO_PKG_VERSION"))
}
