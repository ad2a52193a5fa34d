//! Locate client

use std::time::Duration;

use smapp_core::{
    ApiRequest, ClientOptions, Config, Endpoint, GeoPoint, ResponseShape, ServiceClient,
    SmappError,
};
use tracing::instrument;

use crate::{
    models::{LocateRequest, LocateResult},
    options::{CallOptions, Version},
};

const SERVICE: &str = "locate";

/// Client for `{base}/locate/{version}`
#[derive(Debug, Clone)]
pub struct LocateClient {
    inner: ServiceClient,
}

impl LocateClient {
    /// Create a locate client
    ///
    /// # Errors
    ///
    /// Returns an error if the service URL is invalid, the HTTP client
    /// cannot be initialized, or a path style other than legacy is requested.
    pub fn new(
        config: &Config,
        version: Version,
        timeout: Duration,
        options: ClientOptions,
    ) -> Result<Self, SmappError> {
        let inner = ServiceClient::new(
            config,
            Endpoint::legacy(SERVICE, version.as_str()),
            timeout,
            options,
        )?;
        Ok(Self { inner })
    }

    /// Resolved service URL
    #[must_use]
    pub fn url(&self) -> &str {
        self.inner.url()
    }

    fn build_request(
        &self,
        points: &[GeoPoint],
        options: &CallOptions,
    ) -> Result<ApiRequest, SmappError> {
        if points.is_empty() {
            return Err(SmappError::InvalidInput(
                "at least one point is required".to_string(),
            ));
        }

        Ok(ApiRequest::get(self.inner.url())
            .json_query("json", &LocateRequest { locations: points })?
            .custom_headers(&options.headers))
    }

    /// Snap each point to the road network
    ///
    /// Returns one result per input point, in input order.
    #[instrument(skip(self, points, options), fields(points = points.len()))]
    pub async fn locate_points(
        &self,
        points: &[GeoPoint],
        options: &CallOptions,
    ) -> Result<Vec<LocateResult>, SmappError> {
        let request = self.build_request(points, options)?;
        self.inner
            .execute("locate-points", request, ResponseShape::Plain)
            .await
    }
}
