//! Integration tests for the request pipeline using wiremock HTTP mocking

use std::time::Duration;

use smapp_core::{
    ApiRequest, ClientOptions, Config, ConfigOverrides, Endpoint, ResponseShape, ServiceClient,
    SmappError, version,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, header_exists, method, path, query_param},
};

fn config_for_mock(base_url: &str, overrides: ConfigOverrides) -> Config {
    Config::new_default("test-key", overrides.with_api_base_url(base_url)).unwrap()
}

fn client(config: &Config, timeout: Duration) -> ServiceClient {
    ServiceClient::new(
        config,
        Endpoint::legacy("reverse", "v1"),
        timeout,
        ClientOptions::new(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_header_key_and_user_agent_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse/v1"))
        .and(header("X-Monshi-Key", "test-key"))
        .and(header("User-Agent", version::user_agent()))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri(), ConfigOverrides::new());
    let client = client(&config, Duration::from_secs(5));

    let value: serde_json::Value = client
        .execute("test", ApiRequest::get(client.url()), ResponseShape::Plain)
        .await
        .unwrap();
    assert_eq!(value["ok"], true);

    let received = server.received_requests().await.unwrap();
    assert!(received[0].url.query().is_none());
}

#[tokio::test]
async fn test_query_key_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse/v1"))
        .and(query_param("monshi_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(
        &server.uri(),
        ConfigOverrides::new().with_api_key_source("query"),
    );
    let client = client(&config, Duration::from_secs(5));

    let value: Vec<u8> = client
        .execute("test", ApiRequest::get(client.url()), ResponseShape::Plain)
        .await
        .unwrap();
    assert!(value.is_empty());

    let received = server.received_requests().await.unwrap();
    assert!(!received[0].headers.contains_key("x-monshi-key"));
}

#[tokio::test]
async fn test_custom_key_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header_exists("X-Custom-Key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(
        &server.uri(),
        ConfigOverrides::new().with_api_key_name("X-Custom-Key"),
    );
    let client = client(&config, Duration::from_secs(5));

    let _: serde_json::Value = client
        .execute("test", ApiRequest::get(client.url()), ResponseShape::Plain)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri(), ConfigOverrides::new());
    let client = client(&config, Duration::from_millis(100));

    let result: Result<serde_json::Value, _> = client
        .execute("test", ApiRequest::get(client.url()), ResponseShape::Plain)
        .await;

    let err = result.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string(r#"{"status":"OK"}"#))
        .mount(&server)
        .await;

    let config = config_for_mock(&server.uri(), ConfigOverrides::new());
    let client = client(&config, Duration::from_secs(5));

    let result: Result<serde_json::Value, _> = client
        .execute("test", ApiRequest::get(client.url()), ResponseShape::Plain)
        .await;
    assert!(matches!(
        result,
        Err(SmappError::UnexpectedStatus { status: 503 })
    ));
}

#[tokio::test]
async fn test_connection_refused() {
    let config = Config::new_default(
        "test-key",
        ConfigOverrides::new().with_api_base_url("http://127.0.0.1:1"),
    )
    .unwrap();
    let client = client(&config, Duration::from_secs(5));

    let result: Result<serde_json::Value, _> = client
        .execute("test", ApiRequest::get(client.url()), ResponseShape::Plain)
        .await;
    let err = result.unwrap_err();
    assert!(matches!(err, SmappError::Transport { timed_out: false, .. }));
}
