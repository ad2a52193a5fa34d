//! Shared request pipeline
//!
//! Every service client owns a [`ServiceClient`] and funnels its calls
//! through [`ServiceClient::execute`]:
//!
//! 1. attach service headers, the API key (header or query parameter),
//!    caller headers and the user agent, in that order
//! 2. send through the configured [`HttpTransport`]
//! 3. reject non-success statuses
//! 4. decode the JSON body, unwrapping a `{status, <payload>}` envelope
//!    when the service uses one

use std::{fmt, sync::Arc, time::Duration};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use secrecy::ExposeSecret;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    config::{ApiKeySource, Config},
    error::{ConfigError, SmappError},
    request::ApiRequest,
    transport::{HttpTransport, ReqwestTransport},
    version,
};

/// Envelope status reported by successful calls
pub const OK_STATUS: &str = "OK";

/// URL segment ordering for a service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// `{base}/{service}/{version}`
    #[default]
    Legacy,
    /// `{base}/api/{version}/{service}`
    Api,
}

impl PathStyle {
    /// Build the service URL from a base URL
    #[must_use]
    pub fn service_url(self, base_url: &str, service: &str, version: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Self::Legacy => format!("{base}/{service}/{version}"),
            Self::Api => format!("{base}/api/{version}/{service}"),
        }
    }
}

/// Identifies one upstream service and the path styles it accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Service path segment, e.g. `reverse`
    pub service: &'static str,
    /// API version segment, e.g. `v1`
    pub version: &'static str,
    /// Whether [`PathStyle::Api`] is available
    pub supports_api_path: bool,
}

impl Endpoint {
    /// A service reachable only through the legacy path style
    #[must_use]
    pub const fn legacy(service: &'static str, version: &'static str) -> Self {
        Self {
            service,
            version,
            supports_api_path: false,
        }
    }

    /// A service reachable through both path styles
    #[must_use]
    pub const fn versioned(service: &'static str, version: &'static str) -> Self {
        Self {
            service,
            version,
            supports_api_path: true,
        }
    }
}

/// How the JSON body of a successful response is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// The body is the payload
    Plain,
    /// `{"status": "OK", "<field>": payload}`; any other status is an error
    Enveloped(&'static str),
}

/// Construction-time options shared by all service clients
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// Full service URL, replacing the one derived from the config
    pub url: Option<String>,
    /// URL segment ordering
    pub path_style: PathStyle,
    /// Pre-built HTTP client, used as is
    pub http_client: Option<reqwest::Client>,
    /// Custom transport; takes precedence over `http_client`
    pub transport: Option<Arc<dyn HttpTransport>>,
    /// Name recorded on request spans; defaults to the service name
    pub tracer_name: Option<String>,
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("url", &self.url)
            .field("path_style", &self.path_style)
            .field("http_client", &self.http_client.is_some())
            .field("transport", &self.transport.is_some())
            .field("tracer_name", &self.tracer_name)
            .finish()
    }
}

impl ClientOptions {
    /// Default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the full service URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Select the URL segment ordering
    #[must_use]
    pub const fn with_path_style(mut self, path_style: PathStyle) -> Self {
        self.path_style = path_style;
        self
    }

    /// Send requests through an existing `reqwest::Client`
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Send requests through a custom transport
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Record this name on request spans
    #[must_use]
    pub fn with_tracer_name(mut self, name: impl Into<String>) -> Self {
        self.tracer_name = Some(name.into());
        self
    }
}

/// Configured pipeline for one upstream service
#[derive(Clone)]
pub struct ServiceClient {
    config: Config,
    endpoint: Endpoint,
    url: String,
    transport: Arc<dyn HttpTransport>,
    tracer_name: String,
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("config", &self.config)
            .field("endpoint", &self.endpoint)
            .field("url", &self.url)
            .field("tracer_name", &self.tracer_name)
            .finish_non_exhaustive()
    }
}

impl ServiceClient {
    /// Create a pipeline for `endpoint`
    ///
    /// The timeout applies to every request and only when no custom
    /// transport or HTTP client is supplied.
    pub fn new(
        config: &Config,
        endpoint: Endpoint,
        timeout: Duration,
        options: ClientOptions,
    ) -> Result<Self, SmappError> {
        if options.path_style == PathStyle::Api && !endpoint.supports_api_path {
            return Err(ConfigError::UnsupportedPathStyle(endpoint.service).into());
        }

        let url = options.url.unwrap_or_else(|| {
            options.path_style.service_url(
                config.api_base_url(),
                endpoint.service,
                endpoint.version,
            )
        });
        Url::parse(&url).map_err(|e| ConfigError::InvalidBaseUrl(format!("{url}: {e}")))?;

        let transport: Arc<dyn HttpTransport> = match (options.transport, options.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::with_client(client)),
            (None, None) => Arc::new(ReqwestTransport::new(timeout)?),
        };

        let tracer_name = options
            .tracer_name
            .unwrap_or_else(|| endpoint.service.to_string());

        debug!(service = endpoint.service, url = %url, "Created service client");

        Ok(Self {
            config: config.clone(),
            endpoint,
            url,
            transport,
            tracer_name,
        })
    }

    /// Resolved service URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Service URL with `path` appended
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }

    /// Send `request` and decode the response as `T`
    #[instrument(
        level = "debug",
        skip(self, request),
        fields(
            service = self.endpoint.service,
            tracer = %self.tracer_name,
            method = %request.method,
            url = %request.url,
        )
    )]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: ApiRequest,
        shape: ResponseShape,
    ) -> Result<T, SmappError> {
        let request = self.build_request(request)?;
        debug!("Request initialized");

        let response = self.transport.send(request).await.inspect_err(|e| {
            warn!(error = %e, timed_out = e.is_timeout(), "Request failed");
        })?;

        if !response.is_success() {
            warn!(status = response.status, "Non-success HTTP status");
            return Err(SmappError::UnexpectedStatus {
                status: response.status,
            });
        }

        let decoded = decode_body(&response.body, shape).inspect_err(|e| {
            warn!(error = %e, "Response rejected");
        })?;
        debug!("Response deserialized");
        Ok(decoded)
    }

    fn build_request(&self, request: ApiRequest) -> Result<reqwest::Request, SmappError> {
        self.config.ensure_usable()?;

        let ApiRequest {
            method,
            url,
            mut query,
            headers,
            custom_headers,
            body,
        } = request;

        let mut header_map = HeaderMap::new();
        for (name, value) in &headers {
            insert_header(&mut header_map, name, value)?;
        }

        let key_name = self.config.api_key_name();
        let key = self.config.api_key().expose_secret();
        match self.config.api_key_source() {
            ApiKeySource::Header => {
                let (name, mut value) = header_pair(key_name, key)?;
                value.set_sensitive(true);
                header_map.insert(name, value);
            }
            ApiKeySource::Query => {
                query.retain(|(n, _)| n != key_name);
                query.push((key_name.to_string(), key.to_string()));
            }
        }

        for (name, value) in &custom_headers {
            insert_header(&mut header_map, name, value)?;
        }
        header_map.insert(USER_AGENT, HeaderValue::from_static(version::user_agent()));

        let mut url =
            Url::parse(&url).map_err(|e| ConfigError::InvalidBaseUrl(format!("{url}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(&query);
        }

        let mut built = reqwest::Request::new(method, url);
        *built.headers_mut() = header_map;
        if let Some(body) = body {
            *built.body_mut() = Some(body.into());
        }
        Ok(built)
    }
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), SmappError> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| SmappError::InvalidInput(format!("invalid header name {name:?}: {e}")))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| SmappError::InvalidInput(format!("invalid value for header {name}: {e}")))?;
    Ok((name, value))
}

fn insert_header(map: &mut HeaderMap, name: &str, value: &str) -> Result<(), SmappError> {
    let (name, value) = header_pair(name, value)?;
    map.insert(name, value);
    Ok(())
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    status: String,
    #[serde(flatten)]
    fields: serde_json::Map<String, serde_json::Value>,
}

/// Decode a response body according to `shape`
pub fn decode_body<T: DeserializeOwned>(body: &[u8], shape: ResponseShape) -> Result<T, SmappError> {
    match shape {
        ResponseShape::Plain => {
            serde_json::from_slice(body).map_err(|e| SmappError::Decode(e.to_string()))
        }
        ResponseShape::Enveloped(field) => {
            let mut envelope: Envelope =
                serde_json::from_slice(body).map_err(|e| SmappError::Decode(e.to_string()))?;

            if !envelope.status.eq_ignore_ascii_case(OK_STATUS) {
                return Err(SmappError::UpstreamStatus {
                    status: envelope.status,
                });
            }

            let payload = envelope
                .fields
                .remove(field)
                .ok_or_else(|| SmappError::Decode(format!("missing field `{field}`")))?;
            serde_json::from_value(payload).map_err(|e| SmappError::Decode(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bytes::Bytes;

    use super::*;
    use crate::{
        config::ConfigOverrides,
        transport::{MockHttpTransport, RawResponse},
    };

    fn header_config() -> Config {
        Config::new_default("secret", ConfigOverrides::new().with_api_base_url("http://localhost"))
            .unwrap()
    }

    fn query_config() -> Config {
        Config::new_default(
            "secret",
            ConfigOverrides::new()
                .with_api_base_url("http://localhost")
                .with_api_key_source("query"),
        )
        .unwrap()
    }

    fn client_with(config: &Config, mock: MockHttpTransport) -> ServiceClient {
        ServiceClient::new(
            config,
            Endpoint::legacy("reverse", "v1"),
            Duration::from_secs(1),
            ClientOptions::new().with_transport(Arc::new(mock)),
        )
        .unwrap()
    }

    fn ok(body: &'static str) -> Result<RawResponse, SmappError> {
        Ok(RawResponse {
            status: 200,
            body: Bytes::from_static(body.as_bytes()),
        })
    }

    #[test]
    fn test_path_styles() {
        assert_eq!(
            PathStyle::Legacy.service_url("http://api.teh-1.snappmaps.ir/", "eta", "v1"),
            "http://api.teh-1.snappmaps.ir/eta/v1"
        );
        assert_eq!(
            PathStyle::Api.service_url("http://localhost", "matrix", "v2"),
            "http://localhost/api/v2/matrix"
        );
    }

    #[test]
    fn test_api_path_rejected_for_legacy_services() {
        let result = ServiceClient::new(
            &header_config(),
            Endpoint::legacy("locate", "v1"),
            Duration::from_secs(1),
            ClientOptions::new().with_path_style(PathStyle::Api),
        );
        assert!(matches!(
            result,
            Err(SmappError::Config(ConfigError::UnsupportedPathStyle("locate")))
        ));
    }

    #[test]
    fn test_url_override() {
        let client = ServiceClient::new(
            &header_config(),
            Endpoint::versioned("eta", "v1"),
            Duration::from_secs(1),
            ClientOptions::new()
                .with_url("http://override.local/eta")
                .with_path_style(PathStyle::Api),
        )
        .unwrap();
        assert_eq!(client.url(), "http://override.local/eta");
    }

    #[test]
    fn test_invalid_url_rejected_at_construction() {
        let result = ServiceClient::new(
            &header_config(),
            Endpoint::legacy("reverse", "v1"),
            Duration::from_secs(1),
            ClientOptions::new().with_url("not a url"),
        );
        assert!(matches!(
            result,
            Err(SmappError::Config(ConfigError::InvalidBaseUrl(_)))
        ));
    }

    #[tokio::test]
    async fn test_header_authentication() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(|req| {
                req.headers().get("X-Monshi-Key").map(HeaderValue::as_bytes)
                    == Some(b"secret".as_slice())
                    && req.url().query().is_none()
            })
            .times(1)
            .returning(|_| ok("{}"));

        let client = client_with(&header_config(), mock);
        let _: serde_json::Value = client
            .execute("test", ApiRequest::get(client.url()), ResponseShape::Plain)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_query_authentication() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(|req| {
                req.url().query() == Some("lat=1&monshi_key=secret")
                    && req.headers().get("X-Monshi-Key").is_none()
            })
            .times(1)
            .returning(|_| ok("{}"));

        let client = client_with(&query_config(), mock);
        let request = ApiRequest::get(client.url()).query("lat", "1");
        let _: serde_json::Value = client
            .execute("test", request, ResponseShape::Plain)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_custom_header_overrides_key_header() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send()
            .withf(|req| {
                req.headers().get("x-monshi-key").map(HeaderValue::as_bytes)
                    == Some(b"caller".as_slice())
                    && req.headers().get(USER_AGENT).map(HeaderValue::as_bytes)
                        == Some(version::user_agent().as_bytes())
            })
            .times(1)
            .returning(|_| ok("{}"));

        let client = client_with(&header_config(), mock);
        let mut headers = HashMap::new();
        headers.insert("x-monshi-key".to_string(), "caller".to_string());
        let request = ApiRequest::get(client.url()).custom_headers(&headers);
        let _: serde_json::Value = client
            .execute("test", request, ResponseShape::Plain)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_invalid_custom_header_sends_nothing() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send().times(0);

        let client = client_with(&header_config(), mock);
        let mut headers = HashMap::new();
        headers.insert("bad header".to_string(), "v".to_string());
        let request = ApiRequest::get(client.url()).custom_headers(&headers);
        let result: Result<serde_json::Value, _> =
            client.execute("test", request, ResponseShape::Plain).await;
        assert!(matches!(result, Err(SmappError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send().returning(|_| {
            Ok(RawResponse {
                status: 500,
                body: Bytes::new(),
            })
        });

        let client = client_with(&header_config(), mock);
        let result: Result<serde_json::Value, _> = client
            .execute("test", ApiRequest::get(client.url()), ResponseShape::Plain)
            .await;
        assert!(matches!(
            result,
            Err(SmappError::UnexpectedStatus { status: 500 })
        ));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mut mock = MockHttpTransport::new();
        mock.expect_send().returning(|_| {
            Err(SmappError::Transport {
                message: "connection refused".to_string(),
                timed_out: false,
            })
        });

        let client = client_with(&header_config(), mock);
        let result: Result<serde_json::Value, _> = client
            .execute("test", ApiRequest::get(client.url()), ResponseShape::Plain)
            .await;
        tokio_test::assert_err!(&result);
        assert!(matches!(result, Err(SmappError::Transport { .. })));
    }

    #[test]
    fn test_envelope_ok_is_case_insensitive() {
        let value: Vec<u32> =
            decode_body(br#"{"status":"ok","predictions":[1,2]}"#, ResponseShape::Enveloped("predictions"))
                .unwrap();
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn test_envelope_error_status() {
        let result: Result<serde_json::Value, _> =
            decode_body(br#"{"status":"ERROR"}"#, ResponseShape::Enveloped("result"));
        assert!(matches!(
            result,
            Err(SmappError::UpstreamStatus { status }) if status == "ERROR"
        ));
    }

    #[test]
    fn test_envelope_missing_payload() {
        let result: Result<serde_json::Value, _> =
            decode_body(br#"{"status":"OK"}"#, ResponseShape::Enveloped("result"));
        assert!(matches!(result, Err(SmappError::Decode(_))));
    }

    #[test]
    fn test_invalid_json() {
        let result: Result<serde_json::Value, _> = decode_body(b"<html>", ResponseShape::Plain);
        assert!(matches!(result, Err(SmappError::Decode(_))));
    }
}
