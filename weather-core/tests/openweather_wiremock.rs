//! Integration tests for the OpenWeather client using wiremock
//!
//! Each test mounts a canned response on a mock server and checks the
//! resulting report or the user-facing error message.

use std::{
    io::{Read, Write},
    net::TcpListener,
    thread,
    time::Duration,
};

use weather_core::{
    OpenWeatherConfig, WeatherError, WeatherProvider, WeatherQuery, lookup,
    provider::openweather::OpenWeatherProvider,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn sample_weather_response() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [
            { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }
        ],
        "base": "stations",
        "main": {
            "temp": 284.2,
            "feels_like": 283.4,
            "temp_min": 282.9,
            "temp_max": 285.7,
            "pressure": 1012,
            "humidity": 87
        },
        "visibility": 10000,
        "name": "London",
        "cod": 200
    })
}

fn create_test_client(mock_server: &MockServer, timeout_secs: u64) -> OpenWeatherProvider {
    let config = OpenWeatherConfig {
        api_key: None,
        base_url: mock_server.uri(),
        timeout_secs,
    };
    #[allow(clippy::expect_used)]
    OpenWeatherProvider::new(Some("TEST_KEY".to_string()), &config).expect("Failed to create client")
}

async fn setup_weather_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

async fn query(client: &OpenWeatherProvider, city: &str) -> Result<weather_core::WeatherReport, WeatherError> {
    let query = WeatherQuery::parse(city).expect("city is non-empty");
    client.get_weather(&query).await
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn current_weather_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, 5);
    let report = query(&client, "London").await.expect("Expected success");

    assert_eq!(report.temperature_c.round(), 11.0);
    assert_eq!(report.feels_like_c.round(), 10.0);
    assert_eq!(report.low_c.round(), 10.0);
    assert_eq!(report.high_c.round(), 13.0);
    assert_eq!(report.humidity_pct.round(), 87.0);
    assert_eq!(report.description, "light rain");
    assert_eq!(report.condition_id, 500);

    assert_eq!(
        report.summary(),
        "> Temperature: 11°C\n> Feels like: 10°C\n> Humidity: 87% (rh)\n> High: 13°C\n> Low: 10°C"
    );
    assert_eq!(report.icon().symbol(), "🌧️");
}

#[tokio::test]
async fn lookup_trims_city_before_sending() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, 5);
    let result = lookup(&client, "   New York  ").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn blank_city_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server, 5);
    let err = lookup(&client, "  \t ").await.unwrap_err();

    assert_eq!(err.to_string(), "Please enter a city name.");
}

#[tokio::test]
async fn missing_api_key_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = OpenWeatherConfig {
        api_key: None,
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    let client = OpenWeatherProvider::new(None, &config).expect("client builds");
    let err = query(&client, "London").await.unwrap_err();

    assert!(matches!(err, WeatherError::MissingApiKey), "got: {err:?}");
}

// ============================================================================
// HTTP status scenarios
// ============================================================================

#[tokio::test]
async fn not_found_names_the_city() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })),
    )
    .await;

    let client = create_test_client(&mock_server, 5);
    let err = query(&client, "Atlantis").await.unwrap_err();

    assert!(matches!(err, WeatherError::HttpStatus { status: 404, .. }));
    assert_eq!(err.to_string(), "City 'Atlantis' not found.");
}

#[tokio::test]
async fn unauthorized_includes_client_error_without_key() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(&mock_server, ResponseTemplate::new(401)).await;

    let client = create_test_client(&mock_server, 5);
    let msg = query(&client, "London").await.unwrap_err().to_string();

    assert!(msg.starts_with("Unauthorized ("), "got: {msg}");
    assert!(msg.contains("401"), "got: {msg}");
    assert!(msg.ends_with("Invalid API key."), "got: {msg}");
    assert!(!msg.contains("TEST_KEY"), "API key leaked into: {msg}");
}

#[tokio::test]
async fn forbidden_includes_client_error() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(&mock_server, ResponseTemplate::new(403)).await;

    let client = create_test_client(&mock_server, 5);
    let msg = query(&client, "London").await.unwrap_err().to_string();

    assert!(msg.starts_with("Forbidden ("), "got: {msg}");
    assert!(msg.contains("403"), "got: {msg}");
    assert!(msg.ends_with("Insufficient permissions."), "got: {msg}");
}

#[tokio::test]
async fn fixed_status_messages() {
    let cases = [
        (400, "Bad request — Check your input."),
        (500, "Internal Server Error."),
        (502, "Bad Gateway."),
        (503, "Service Unavailable."),
        (504, "Gateway Timeout."),
    ];

    for (status, expected) in cases {
        let mock_server = MockServer::start().await;
        setup_weather_mock(&mock_server, ResponseTemplate::new(status)).await;

        let client = create_test_client(&mock_server, 5);
        let err = query(&client, "London").await.unwrap_err();

        assert_eq!(err.to_string(), expected, "status {status}");
    }
}

#[tokio::test]
async fn unknown_status_uses_generic_message() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(&mock_server, ResponseTemplate::new(429)).await;

    let client = create_test_client(&mock_server, 5);
    let msg = query(&client, "London").await.unwrap_err().to_string();

    assert!(msg.starts_with("Unknown HTTP error: "), "got: {msg}");
    assert!(msg.contains("429"), "got: {msg}");
}

// ============================================================================
// Body scenarios
// ============================================================================

#[tokio::test]
async fn embedded_status_on_http_ok_is_an_error() {
    let mock_server = MockServer::start().await;

    let mut body = sample_weather_response();
    body["cod"] = serde_json::json!("401");
    setup_weather_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server, 5);
    let err = query(&client, "London").await.unwrap_err();

    assert!(matches!(err, WeatherError::ApplicationStatus(_)));
    assert_eq!(err.to_string(), "Unexpected API response: 401");
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not json at all"),
    )
    .await;

    let client = create_test_client(&mock_server, 5);
    let err = query(&client, "London").await.unwrap_err();

    assert!(matches!(err, WeatherError::MalformedResponse(_)), "got: {err:?}");
}

// ============================================================================
// Transport scenarios
// ============================================================================

#[tokio::test]
async fn slow_server_times_out() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(sample_weather_response())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let client = create_test_client(&mock_server, 1);
    let err = query(&client, "London").await.unwrap_err();

    assert!(matches!(err, WeatherError::Timeout), "got: {err:?}");
    assert_eq!(err.to_string(), "Timeout — Server did not respond.");
}

#[tokio::test]
async fn refused_connection_is_a_connection_error() {
    // Bind then drop a listener to get a local port nothing is serving.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    let config = OpenWeatherConfig {
        api_key: None,
        base_url: format!("http://127.0.0.1:{port}"),
        timeout_secs: 5,
    };
    let client = OpenWeatherProvider::new(Some("TEST_KEY".into()), &config).expect("client builds");
    let err = query(&client, "London").await.unwrap_err();

    assert!(matches!(err, WeatherError::Connection), "got: {err:?}");
    assert_eq!(err.to_string(), "Connection Error — Check your internet.");
}

#[tokio::test]
async fn truncated_body_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();

    // Promise 500 bytes, send a handful, then hang up.
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(
                b"HTTP/1.1 200 OK\r\n\
                  Content-Type: application/json\r\n\
                  Content-Length: 500\r\n\r\n\
                  {\"cod\": 200, \"main\"",
            )
            .expect("write response");
    });

    let config = OpenWeatherConfig {
        api_key: None,
        base_url: format!("http://127.0.0.1:{port}"),
        timeout_secs: 5,
    };
    let client = OpenWeatherProvider::new(Some("TEST_KEY".into()), &config).expect("client builds");
    let err = query(&client, "London").await.unwrap_err();
    server.join().expect("server thread");

    assert!(matches!(err, WeatherError::Network(_)), "got: {err:?}");
    assert!(err.to_string().starts_with("Network error:\n"), "got: {err}");
}
