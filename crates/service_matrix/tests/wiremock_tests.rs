//! Integration tests for MatrixClient using wiremock HTTP mocking

use std::{collections::HashMap, time::Duration};

use service_matrix::{CallOptions, Engine, GeoPoint, MatrixClient, PathStyle, SmappError, Version};
use smapp_core::{ClientOptions, Config, ConfigOverrides};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, body_json, header, method, path, query_param, query_param_is_missing},
};

const MATRIX_RESPONSE: &str = r#"{"sources_to_targets":[
    [{"distance":2310,"time":301,"from_index":0,"to_index":0,"status":"Success"},
     {"distance":4120,"time":522,"from_index":0,"to_index":1,"status":"Success"}],
    [{"distance":1980,"time":260,"from_index":1,"to_index":0,"status":"Success"},
     {"distance":0,"time":0,"from_index":1,"to_index":1,"status":"Failed"}]
]}"#;

fn config_for_mock(server: &MockServer) -> Config {
    Config::new_default("test-key", ConfigOverrides::new().with_api_base_url(server.uri()))
        .unwrap()
}

fn sources() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(35.774_363, 51.418_149),
        GeoPoint::new(35.732_116, 51.422_477),
    ]
}

fn targets() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(35.725_500, 51.411_000),
        GeoPoint::new(35.700_000, 51.390_000),
    ]
}

fn client(server: &MockServer, version: Version, style: PathStyle) -> MatrixClient {
    MatrixClient::new(
        &config_for_mock(server),
        version,
        Duration::from_secs(5),
        ClientOptions::new().with_path_style(style),
    )
    .unwrap()
}

#[tokio::test]
async fn test_get_matrix_get_mode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/matrix/v1"))
        .and(query_param("engine", "v1"))
        .and(query_param_is_missing("no_traffic"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MATRIX_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let output = client(&server, Version::V1, PathStyle::Legacy)
        .get_matrix(&sources(), &targets(), &CallOptions::new())
        .await
        .unwrap();

    assert_eq!(output.sources_to_targets.len(), 2);
    assert_eq!(output.get(0, 1).unwrap().distance, 4120);
    assert_eq!(output.get(1, 1).unwrap().status, "Failed");

    let received = server.received_requests().await.unwrap();
    let json = received[0]
        .url
        .query_pairs()
        .find(|(k, _)| *k == "json")
        .map(|(_, v)| v.into_owned())
        .unwrap();
    let payload: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(payload["sources"].as_array().unwrap().len(), 2);
    assert_eq!(payload["targets"][1]["lon"], 51.39);
}

#[tokio::test]
async fn test_get_matrix_post_mode() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/matrix"))
        .and(query_param("engine", "ocelot"))
        .and(query_param("no_traffic", "true"))
        .and(query_param_is_missing("json"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "sources": [{"lat": 35.774_363, "lon": 51.418_149}, {"lat": 35.732_116, "lon": 51.422_477}],
            "targets": [{"lat": 35.7255, "lon": 51.411}, {"lat": 35.7, "lon": 51.39}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(MATRIX_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let options = CallOptions::new()
        .with_post()
        .with_no_traffic()
        .with_engine(Engine::Ocelot);
    let output = client(&server, Version::V2, PathStyle::Api)
        .get_matrix(&sources(), &targets(), &options)
        .await
        .unwrap();

    assert_eq!(output.failed_cells().count(), 1);
}

#[tokio::test]
async fn test_custom_engine_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("engine", "experimental"))
        .and(header("x-request-id", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MATRIX_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let mut headers = HashMap::new();
    headers.insert("X-Request-Id".to_string(), "abc".to_string());
    let options = CallOptions::new()
        .with_engine_name("experimental")
        .with_headers(headers);

    let result = client(&server, Version::V1, PathStyle::Legacy)
        .get_matrix(&sources(), &targets(), &options)
        .await;
    tokio_test::assert_ok!(result);
}

#[tokio::test]
async fn test_empty_sources_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string(MATRIX_RESPONSE))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server, Version::V1, PathStyle::Legacy);

    let result = client.get_matrix(&[], &targets(), &CallOptions::new()).await;
    assert!(matches!(result, Err(SmappError::InvalidInput(_))));

    let result = client
        .get_matrix(&sources(), &[], &CallOptions::new().with_post())
        .await;
    assert!(matches!(result, Err(SmappError::InvalidInput(_))));
}

#[tokio::test]
async fn test_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server, Version::V1, PathStyle::Legacy)
        .get_matrix(&sources(), &targets(), &CallOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, SmappError::UnexpectedStatus { status: 500 }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client(&server, Version::V1, PathStyle::Legacy)
        .get_matrix(&sources(), &targets(), &CallOptions::new())
        .await;
    assert!(matches!(result, Err(SmappError::Decode(_))));
}
