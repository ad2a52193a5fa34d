//! ETA client

use std::time::Duration;

use smapp_core::{
    ApiRequest, ClientOptions, Config, Endpoint, ResponseShape, ServiceClient, SmappError,
};
use tracing::instrument;

use crate::{
    models::{Eta, EtaRequest, Point},
    options::{CallOptions, Version},
};

const SERVICE: &str = "eta";

/// Minimum number of points for an estimate
pub const MIN_POINTS: usize = 2;

/// Client for `{base}/eta/{version}` or `{base}/api/{version}/eta`
#[derive(Debug, Clone)]
pub struct EtaClient {
    inner: ServiceClient,
}

impl EtaClient {
    /// Create an ETA client; both path styles are supported
    ///
    /// # Errors
    ///
    /// Returns an error if the service URL is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(
        config: &Config,
        version: Version,
        timeout: Duration,
        options: ClientOptions,
    ) -> Result<Self, SmappError> {
        let inner = ServiceClient::new(
            config,
            Endpoint::versioned(SERVICE, version.as_str()),
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

    fn build_request(&self, points: &[Point], options: &CallOptions) -> Result<ApiRequest, SmappError> {
        if points.len() < MIN_POINTS {
            return Err(SmappError::InvalidInput(format!(
                "at least {MIN_POINTS} points are required, got {}",
                points.len()
            )));
        }

        let payload = EtaRequest {
            locations: points,
            departure_date_time: options.departure_date_time.as_deref(),
            metadata: options.metadata.as_ref(),
        };

        Ok(ApiRequest::get(self.inner.url())
            .query_opt("no_traffic", options.no_traffic)
            .query("engine", options.engine.as_str())
            .json_query("json", &payload)?
            .custom_headers(&options.headers))
    }

    /// Estimated travel time along `points`
    ///
    /// Fails with [`SmappError::InvalidInput`] before sending anything when
    /// fewer than two points are given.
    #[instrument(skip(self, points, options), fields(points = points.len(), engine = %options.engine))]
    pub async fn get_eta(&self, points: &[Point], options: &CallOptions) -> Result<Eta, SmappError> {
        let request = self.build_request(points, options)?;
        self.inner
            .execute("get-eta", request, ResponseShape::Plain)
            .await
    }
}
