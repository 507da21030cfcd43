//! Integration tests for the OpenWeatherMap client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use domain::value_objects::{CityQuery, ProxyEndpoint};
use integration_weather::{
    OpenWeatherClient, UPSTREAM_FALLBACK_MESSAGE, WeatherClient, WeatherConfig, WeatherError,
};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const API_KEY: &str = "test-key";

/// Sample `/weather` response
fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "base": "stations",
        "main": {
            "temp": 8.4,
            "feels_like": 6.1,
            "temp_min": 7.2,
            "temp_max": 9.5,
            "pressure": 1012,
            "humidity": 81
        },
        "visibility": 10000,
        "wind": {"speed": 4.6, "deg": 240},
        "clouds": {"all": 75},
        "dt": 1_705_320_000,
        "sys": {"country": "GB", "sunrise": 1_705_305_600, "sunset": 1_705_336_000},
        "timezone": 0,
        "id": 2_643_743,
        "name": "London",
        "cod": 200
    })
}

/// Sample `/forecast` response with eight 3-hour entries on 2024-01-15/16
fn sample_forecast_response() -> serde_json::Value {
    let start = 1_705_276_800_i64;
    let list: Vec<serde_json::Value> = (0..8)
        .map(|i| {
            let dt = start + i * 3 * 3600;
            serde_json::json!({
                "dt": dt,
                "main": {"temp": 5 + i, "feels_like": 3.0, "humidity": 70, "pressure": 1015},
                "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
                "wind": {"speed": 3.1},
                "dt_txt": format!("2024-01-15 {:02}:00:00", i * 3)
            })
        })
        .collect();

    serde_json::json!({
        "cod": "200",
        "message": 0,
        "cnt": list.len(),
        "list": list,
        "city": {"id": 2_643_743, "name": "London", "country": "GB", "timezone": 0}
    })
}

fn sample_geo_response() -> serde_json::Value {
    serde_json::json!([
        {"name": "Springfield", "lat": 39.80, "lon": -89.64, "country": "US", "state": "Illinois"},
        {"name": "Springfield", "lat": 37.21, "lon": -93.29, "country": "US", "state": "Missouri"}
    ])
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer, api_key: Option<&str>) -> OpenWeatherClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        geo_base_url: format!("{}/geo", mock_server.uri()),
        timeout_secs: 5,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    OpenWeatherClient::new(config, api_key.map(SecretString::from))
        .expect("Failed to create client")
}

#[allow(clippy::expect_used)]
fn city(name: &str) -> CityQuery {
    CityQuery::parse(name).expect("valid city")
}

/// Setup a mock for `path` with the given response
async fn setup_mock(mock_server: &MockServer, endpoint_path: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(endpoint_path))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_get_current_weather_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(200).set_body_json(sample_current_response()),
    )
    .await;

    let client = create_test_client(&mock_server, Some(API_KEY));
    let result = client.get_current(&city("London")).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let current = result.unwrap();
    assert_eq!(current.location.name, "London");
    assert!((current.temperature - 8.4).abs() < 0.01);
    assert_eq!(current.humidity.value(), 81);
    assert_eq!(current.weather_code, 803);
}

#[tokio::test]
async fn test_get_forecast_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server, Some(API_KEY));
    let result = client.get_forecast(&city("London")).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let forecast = result.unwrap();
    assert_eq!(forecast.location.country, "GB");
    assert_eq!(forecast.samples.len(), 8);
    assert!(forecast.samples[4].is_midday());
}

#[tokio::test]
async fn test_search_cities_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/geo/direct",
        ResponseTemplate::new(200).set_body_json(sample_geo_response()),
    )
    .await;

    let client = create_test_client(&mock_server, Some(API_KEY));
    let results = client.search_cities(&city("Spring")).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[1].display_name(), "Springfield, Missouri, US");
}

#[tokio::test]
async fn test_relay_returns_body_untouched() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(200).set_body_json(sample_current_response()),
    )
    .await;

    let client = create_test_client(&mock_server, Some(API_KEY));
    let body = client
        .relay(ProxyEndpoint::Weather, &city("London"))
        .await
        .unwrap();

    assert_eq!(body, sample_current_response());
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_upstream_error_carries_provider_message() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
    )
    .await;

    let client = create_test_client(&mock_server, Some(API_KEY));
    let result = client.relay(ProxyEndpoint::Weather, &city("Atlantis")).await;

    match result {
        Err(WeatherError::Upstream { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "city not found");
        },
        other => panic!("Expected Upstream, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_upstream_error_without_message_uses_fallback() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(502).set_body_string("Bad Gateway"),
    )
    .await;

    let client = create_test_client(&mock_server, Some(API_KEY));
    let result = client.get_forecast(&city("London")).await;

    match result {
        Err(WeatherError::Upstream { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, UPSTREAM_FALLBACK_MESSAGE);
        },
        other => panic!("Expected Upstream, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server, Some(API_KEY));
    let result = client.get_current(&city("London")).await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_missing_key_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, None);
    let result = client.relay(ProxyEndpoint::Forecast, &city("London")).await;

    assert!(
        matches!(result, Err(WeatherError::MissingApiKey)),
        "Expected MissingApiKey, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unreachable_server_is_request_failure() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server, Some(API_KEY));
    drop(mock_server);

    let result = client.get_current(&city("London")).await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_data_request_contains_correct_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "New York"))
        .and(query_param("appid", API_KEY))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Some(API_KEY));
    let result = client.get_forecast(&city("  New York ")).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_geo_request_contains_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/direct"))
        .and(query_param("q", "Spring"))
        .and(query_param("limit", "5"))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_geo_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, Some(API_KEY));
    let result = client.relay(ProxyEndpoint::Geo, &city("Spring")).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}
