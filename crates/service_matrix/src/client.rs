//! Matrix client

use std::time::Duration;

use smapp_core::{
    ApiRequest, ClientOptions, Config, Endpoint, GeoPoint, ResponseShape, ServiceClient,
    SmappError,
};
use tracing::instrument;

use crate::{
    models::{Input, Output},
    options::{CallOptions, Version},
};

const SERVICE: &str = "matrix";

/// Client for `{base}/matrix/{version}` or `{base}/api/{version}/matrix`
#[derive(Debug, Clone)]
pub struct MatrixClient {
    inner: ServiceClient,
}

impl MatrixClient {
    /// Create a matrix client; both path styles are supported
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

    fn build_request(
        &self,
        sources: &[GeoPoint],
        targets: &[GeoPoint],
        options: &CallOptions,
    ) -> Result<ApiRequest, SmappError> {
        if sources.is_empty() || targets.is_empty() {
            return Err(SmappError::InvalidInput(
                "both sources and targets must be non-empty".to_string(),
            ));
        }

        let input = Input { sources, targets };
        let request = if options.use_post {
            ApiRequest::post(self.inner.url()).json_body(&input)?
        } else {
            ApiRequest::get(self.inner.url()).json_query("json", &input)?
        };

        Ok(request
            .query_opt("no_traffic", options.no_traffic)
            .query("engine", options.engine.as_str())
            .custom_headers(&options.headers))
    }

    /// Travel time and distance from every source to every target
    ///
    /// Per-cell failures are reported in [`Cell::status`](crate::Cell)
    /// and are not turned into errors.
    #[instrument(
        skip(self, sources, targets, options),
        fields(sources = sources.len(), targets = targets.len(), post = options.use_post)
    )]
    pub async fn get_matrix(
        &self,
        sources: &[GeoPoint],
        targets: &[GeoPoint],
        options: &CallOptions,
    ) -> Result<Output, SmappError> {
        let request = self.build_request(sources, targets, options)?;
        self.inner
            .execute("get-matrix", request, ResponseShape::Plain)
            .await
    }
}
