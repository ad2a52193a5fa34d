//! Reverse geocoding client
//!
//! Turns a coordinate into address components, a display name or the
//! frequent-address variants, one at a time or in batches.

use std::time::Duration;

use smapp_core::{
    ApiRequest, ClientOptions, Config, Endpoint, ResponseShape, ServiceClient, SmappError,
    format_coordinate,
};
use tracing::instrument;

use crate::{
    models::{
        BatchDisplayNameResult, BatchRequest, BatchResponse, BatchResult, Component, Components,
        DisplayName, FrequentAddress,
    },
    options::{CallOptions, ResponseType, Version},
    structural::{StructuralComponent, StructuralResult},
};

const SERVICE: &str = "reverse";

/// Client for `{base}/reverse/{version}`
#[derive(Debug, Clone)]
pub struct ReverseClient {
    inner: ServiceClient,
}

impl ReverseClient {
    /// Create a reverse geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the service URL is invalid, the path style is
    /// not legacy, or the HTTP client cannot be initialized.
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

    fn lookup(
        &self,
        lat: f64,
        lon: f64,
        options: &CallOptions,
        response_type: Option<ResponseType>,
        display: bool,
    ) -> ApiRequest {
        ApiRequest::get(self.inner.url())
            .query("lat", format_coordinate(lat))
            .query("lon", format_coordinate(lon))
            .query_opt("language", options.language)
            .query_opt("zoom", options.zoom_level)
            .query_opt("type", response_type.or(options.response_type))
            .query("display", display.to_string())
            .query_opt("normalize", options.normalize.then_some("true"))
            .custom_headers(&options.headers)
    }

    /// Address components of a location
    #[instrument(skip(self, options))]
    pub async fn get_components(
        &self,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> Result<Vec<Component>, SmappError> {
        let request = self.lookup(lat, lon, options, None, false);
        let result: Components = self
            .inner
            .execute("get-components", request, ResponseShape::Enveloped("result"))
            .await?;
        Ok(result.components)
    }

    /// Formatted address of a location
    #[instrument(skip(self, options))]
    pub async fn get_display_name(
        &self,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> Result<String, SmappError> {
        let request = self.lookup(lat, lon, options, None, true);
        let result: DisplayName = self
            .inner
            .execute("get-display-name", request, ResponseShape::Enveloped("result"))
            .await?;
        Ok(result.display_name)
    }

    /// Frequent-address variants of a location; the response type is forced to `frequent`
    #[instrument(skip(self, options))]
    pub async fn get_frequent(
        &self,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> Result<FrequentAddress, SmappError> {
        let request = self.lookup(lat, lon, options, Some(ResponseType::Frequent), false);
        self.inner
            .execute("get-frequent", request, ResponseShape::Enveloped("result"))
            .await
    }

    /// Components of a location sorted into administrative levels
    #[instrument(skip(self, options))]
    pub async fn get_structural_result(
        &self,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> Result<StructuralComponent, SmappError> {
        let components = self.get_components(lat, lon, options).await?;
        Ok(StructuralComponent::from_components(&components))
    }

    /// Components for many locations in one request
    ///
    /// Items must not use the `frequent` type or ask for a display name.
    #[instrument(skip(self, batch), fields(items = batch.requests.len()))]
    pub async fn get_batch(&self, batch: &BatchRequest) -> Result<Vec<BatchResult>, SmappError> {
        validate_batch(batch, false)?;
        let request = ApiRequest::post(self.inner.url()).json_body(batch)?;
        let response: BatchResponse<BatchResult> = self
            .inner
            .execute("get-batch-reverse", request, ResponseShape::Plain)
            .await?;
        Ok(response.results)
    }

    /// Display names for many locations in one request
    ///
    /// Every item must ask for a display name.
    #[instrument(skip(self, batch), fields(items = batch.requests.len()))]
    pub async fn get_batch_display_name(
        &self,
        batch: &BatchRequest,
    ) -> Result<Vec<BatchDisplayNameResult>, SmappError> {
        validate_batch(batch, true)?;
        let request = ApiRequest::post(self.inner.url()).json_body(batch)?;
        let response: BatchResponse<BatchDisplayNameResult> = self
            .inner
            .execute("get-batch-reverse-display-name", request, ResponseShape::Plain)
            .await?;
        Ok(response.results)
    }

    /// Structured components for many locations in one request
    #[instrument(skip(self, batch), fields(items = batch.requests.len()))]
    pub async fn get_batch_structural_results(
        &self,
        batch: &BatchRequest,
    ) -> Result<Vec<StructuralResult>, SmappError> {
        let results = self.get_batch(batch).await?;
        Ok(results
            .into_iter()
            .map(|r| StructuralResult {
                id: r.id,
                result: StructuralComponent::from_components(&r.result.components),
            })
            .collect())
    }
}

fn validate_batch(batch: &BatchRequest, display: bool) -> Result<(), SmappError> {
    if batch.requests.is_empty() {
        return Err(SmappError::InvalidInput(
            "batch must contain at least one request".to_string(),
        ));
    }

    for item in &batch.requests {
        if item.response_type == Some(ResponseType::Frequent) {
            return Err(SmappError::InvalidInput(format!(
                "batch item {} uses the frequent type, which batches do not support",
                item.id
            )));
        }
        if item.display != display {
            return Err(SmappError::InvalidInput(format!(
                "batch item {} has display={}, expected display={display}",
                item.id, item.display
            )));
        }
    }
    Ok(())
}
