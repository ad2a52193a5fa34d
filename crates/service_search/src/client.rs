//! Search client
//!
//! Wraps the `/place/*` endpoints: popular cities, city search,
//! autocomplete and place details.

use std::time::Duration;

use smapp_core::{
    ApiRequest, ClientOptions, Config, Endpoint, ResponseShape, ServiceClient, SmappError,
};
use tracing::instrument;

use crate::{
    models::{City, Detail, SearchResult},
    options::{CallOptions, Version},
};

const SERVICE: &str = "search";

/// Client for `{base}/search/{version}`
#[derive(Debug, Clone)]
pub struct SearchClient {
    inner: ServiceClient,
}

impl SearchClient {
    /// Create a search client
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

    fn base_request(&self, path: &str, options: &CallOptions) -> ApiRequest {
        ApiRequest::get(self.inner.url_for(path))
            .query_opt("location", options.location)
            .query_opt("language", options.language)
            .query_opt("context", options.request_context)
    }

    /// Popular cities
    #[instrument(skip(self, options))]
    pub async fn get_cities(&self, options: &CallOptions) -> Result<Vec<City>, SmappError> {
        let request = self
            .base_request("/place/cities", options)
            .custom_headers(&options.headers);
        self.inner
            .execute("get-cities", request, ResponseShape::Enveloped("predictions"))
            .await
    }

    /// Cities whose name matches `input`
    #[instrument(skip(self, options))]
    pub async fn search_city(
        &self,
        input: &str,
        options: &CallOptions,
    ) -> Result<Vec<City>, SmappError> {
        let request = self
            .base_request("/place/search/city", options)
            .query("input", input)
            .custom_headers(&options.headers);
        self.inner
            .execute("search-city", request, ResponseShape::Enveloped("predictions"))
            .await
    }

    /// Places matching a partial `input`
    #[instrument(skip(self, options))]
    pub async fn auto_complete(
        &self,
        input: &str,
        options: &CallOptions,
    ) -> Result<Vec<SearchResult>, SmappError> {
        let request = self
            .base_request("/place/autocomplete/json", options)
            .query("input", input)
            .query_opt("user_location", options.user_location)
            .query_opt("city_id", options.city_id)
            .custom_headers(&options.headers);
        self.inner
            .execute("auto-complete", request, ResponseShape::Enveloped("predictions"))
            .await
    }

    /// Details of a place id returned by [`SearchClient::auto_complete`]
    #[instrument(skip(self, options))]
    pub async fn details(&self, place_id: &str, options: &CallOptions) -> Result<Detail, SmappError> {
        let request = ApiRequest::get(self.inner.url_for("/place/details/json"))
            .query("placeid", place_id)
            .custom_headers(&options.headers);
        self.inner
            .execute("details", request, ResponseShape::Enveloped("result"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use smapp_core::ConfigOverrides;

    use super::*;
    use crate::options::{Language, RequestContext};

    fn client() -> SearchClient {
        let config = Config::new_default("key", ConfigOverrides::new()).unwrap();
        SearchClient::new(&config, Version::V1, Duration::from_secs(1), ClientOptions::new())
            .unwrap()
    }

    #[test]
    fn test_default_url() {
        assert_eq!(
            client().url(),
            "http://smapp-api.apps.inter-dc.teh-1.snappcloud.io/search/v1"
        );
    }

    #[test]
    fn test_base_request_parameters() {
        let options = CallOptions::new()
            .with_location(35.7, 51.4)
            .with_language(Language::English)
            .with_request_context(RequestContext::Origin);
        let request = client().base_request("/place/cities", &options);

        assert!(request.url().ends_with("/search/v1/place/cities"));
        assert_eq!(request.query_value("location"), Some("35.700000,51.400000"));
        assert_eq!(request.query_value("language"), Some("en"));
        assert_eq!(request.query_value("context"), Some("origin"));
    }

    #[test]
    fn test_base_request_without_options() {
        let request = client().base_request("/place/cities", &CallOptions::new());
        assert_eq!(request.query_value("location"), None);
        assert_eq!(request.query_value("language"), None);
        assert_eq!(request.query_value("context"), None);
    }
}
