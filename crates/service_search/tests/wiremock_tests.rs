//! Integration tests for SearchClient using wiremock HTTP mocking

use std::time::Duration;

use service_search::{CallOptions, Language, RequestContext, SearchClient, SmappError, Version};
use smapp_core::{ClientOptions, Config, ConfigOverrides};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

const CITIES_RESPONSE: &str = r#"{
    "status": "OK",
    "predictions": [
        {
            "id": 1,
            "name": "تهران",
            "centroid": {"latitude": "35.6892", "longitude": "51.3890"},
            "description": "استان تهران",
            "metadata": {"city_detail": {"city_id": 1, "district_id": 10, "hexagon_id": 100}}
        },
        {
            "id": 2,
            "name": "کرج",
            "centroid": {"latitude": "35.8400", "longitude": "50.9391"},
            "description": "استان البرز",
            "metadata": {"city_detail": {"city_id": 2, "district_id": 20, "hexagon_id": 200}}
        }
    ]
}"#;

const AUTOCOMPLETE_RESPONSE: &str = r#"{
    "predictions": [
        {
            "place_id": "<string>::4645831551",
            "name": "آزادی",
            "description": "تهران، منطقه ۱۰، نزدیک کنارگذر آزادی",
            "structured_formatting": {"main_text": "آزادی", "secondary_text": "تهران، منطقه ۱۰"},
            "type": "highway:primary",
            "location": {"latitude": "35.7002503", "longitude": "51.3636759"},
            "distance": 6619441,
            "area_length": 616.39,
            "all_tags": ["highway:primary"]
        }
    ],
    "powered-by": "Smapp",
    "status": "OK"
}"#;

fn client_for_mock(server: &MockServer) -> SearchClient {
    let config =
        Config::new_default("test-key", ConfigOverrides::new().with_api_base_url(server.uri()))
            .unwrap();
    SearchClient::new(&config, Version::V1, Duration::from_secs(5), ClientOptions::new()).unwrap()
}

#[tokio::test]
async fn test_get_cities() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/v1/place/cities"))
        .and(query_param("location", "35.700000,51.400000"))
        .and(query_param("language", "fa"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CITIES_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let options = CallOptions::new()
        .with_location(35.7, 51.4)
        .with_language(Language::Farsi);
    let cities = client.get_cities(&options).await.unwrap();

    assert_eq!(cities.len(), 2);
    assert_eq!(cities[0].name, "تهران");
    assert_eq!(cities[1].metadata.city_detail.city_id, 2);
}

#[tokio::test]
async fn test_search_city() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/v1/place/search/city"))
        .and(query_param("input", "کر"))
        .and(query_param("context", "favourite"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CITIES_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let options = CallOptions::new().with_request_context(RequestContext::Favourite);
    let cities = client.search_city("کر", &options).await.unwrap();
    assert_eq!(cities.len(), 2);
}

#[tokio::test]
async fn test_auto_complete() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/v1/place/autocomplete/json"))
        .and(query_param("input", "آزادی"))
        .and(query_param("user_location", "35.800000,51.500000"))
        .and(query_param("city_id", "1"))
        .and(query_param("context", "destination1"))
        .and(query_param_is_missing("location"))
        .respond_with(ResponseTemplate::new(200).set_body_string(AUTOCOMPLETE_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let options = CallOptions::new()
        .with_user_location(35.8, 51.5)
        .with_city_id(1)
        .with_request_context(RequestContext::FirstDestination);
    let results = client.auto_complete("آزادی", &options).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].result_type, "highway:primary");
    assert_eq!(results[0].structured_formatting.main_text, "آزادی");
    assert!((results[0].distance - 6_619_441.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_details() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/v1/place/details/json"))
        .and(query_param("placeid", "<string>::4645831551"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":"OK","result":{"name":"آزادی","geometry":{"location":{"lat":35.70025,"lng":51.36367}}}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let detail = client
        .details("<string>::4645831551", &CallOptions::new())
        .await
        .unwrap();
    assert_eq!(detail.name, "آزادی");
    assert!((detail.geometry.location.lat - 35.70025).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_lowercase_ok_status_accepted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/v1/place/cities"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"status":"ok","predictions":[]}"#),
        )
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let cities = client.get_cities(&CallOptions::new()).await.unwrap();
    assert!(cities.is_empty());
}

#[tokio::test]
async fn test_error_status_in_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ERROR"}"#))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);

    let result = client.auto_complete("x", &CallOptions::new()).await;
    assert!(matches!(result, Err(SmappError::UpstreamStatus { .. })));

    let result = client.details("x", &CallOptions::new()).await;
    assert!(matches!(result, Err(SmappError::UpstreamStatus { .. })));
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let result = client.get_cities(&CallOptions::new()).await;
    assert!(matches!(result, Err(SmappError::Decode(_))));
}

#[tokio::test]
async fn test_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let result = client.search_city("x", &CallOptions::new()).await;
    let err = result.unwrap_err();
    assert!(matches!(err, SmappError::UnexpectedStatus { status: 500 }));
    assert!(err.is_retryable());
}
