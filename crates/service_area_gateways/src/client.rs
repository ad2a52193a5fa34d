//! Area gateways client

use std::time::Duration;

use smapp_core::{
    ApiRequest, ClientOptions, Config, Endpoint, GeoPoint, ResponseShape, ServiceClient,
    SmappError,
};
use tracing::instrument;

use crate::{
    models::Area,
    options::{CallOptions, Version},
};

const SERVICE: &str = "area-gateways";
const ACCEPT_LANGUAGE_HEADER: &str = "Accept-Language";

/// Client for `{base}/area-gateways/{version}`
#[derive(Debug, Clone)]
pub struct AreaGatewaysClient {
    inner: ServiceClient,
}

impl AreaGatewaysClient {
    /// Create an area gateways client
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

    fn build_request(&self, point: GeoPoint, options: &CallOptions) -> Result<ApiRequest, SmappError> {
        point.validate()?;

        let mut request = ApiRequest::get(self.inner.url()).json_body(&point)?;
        if let Some(language) = options.language {
            request = request.header(ACCEPT_LANGUAGE_HEADER, language.as_str());
        }
        Ok(request.custom_headers(&options.headers))
    }

    /// Area containing the point, with its gates
    ///
    /// Out-of-range coordinates fail with [`SmappError::InvalidInput`]
    /// before anything is sent. When no area matches, the result is
    /// [`Area::is_empty`].
    #[instrument(skip(self, options))]
    pub async fn get_gateways(
        &self,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> Result<Area, SmappError> {
        let request = self.build_request(GeoPoint::new(lat, lon), options)?;
        self.inner
            .execute("get-gateways", request, ResponseShape::Plain)
            .await
    }
}
