use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    OpenWeatherConfig, WeatherError, WeatherQuery, WeatherReport, WeatherResult,
    presentation::kelvin_to_celsius,
};

use super::WeatherProvider;

/// `cod` value of a successful current-weather body.
const STATUS_OK: i64 = 200;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: Option<String>,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    /// Without an API key every request fails with
    /// [`WeatherError::MissingApiKey`] before anything is sent.
    pub fn new(api_key: Option<String>, config: &OpenWeatherConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(classify_transport)?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn fetch_current(&self, query: &WeatherQuery) -> WeatherResult {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;
        let url = format!("{}/weather", self.base_url);
        debug!(url = %url, "Fetching current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("q", query.city()), ("appid", api_key)])
            .send()
            .await
            .map_err(classify_transport)?;

        if let Err(err) = res.error_for_status_ref() {
            let status = res.status().as_u16();
            debug!(status, "OpenWeather rejected the request");
            return Err(WeatherError::HttpStatus {
                status,
                city: query.city().to_string(),
                detail: err.without_url().to_string(),
            });
        }

        let body = res.text().await.map_err(classify_transport)?;
        parse_current(&body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self), fields(city = %query.city()))]
    async fn get_weather(&self, query: &WeatherQuery) -> WeatherResult {
        self.fetch_current(query).await
    }
}

/// Connect failures are checked before timeouts; a connect timeout reports as
/// a connection error.
fn classify_transport(err: reqwest::Error) -> WeatherError {
    if err.is_connect() {
        WeatherError::Connection
    } else if err.is_timeout() {
        WeatherError::Timeout
    } else {
        WeatherError::Network(err.without_url().to_string())
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
}

fn parse_current(body: &str) -> WeatherResult {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| WeatherError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let cod = value.get("cod");
    if application_status(cod) != Some(STATUS_OK) {
        return Err(WeatherError::ApplicationStatus(render_status(cod)));
    }

    let parsed: OwCurrentResponse = serde_json::from_value(value)
        .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

    let condition = parsed.weather.into_iter().next().ok_or_else(|| {
        WeatherError::MalformedResponse("response contained no weather conditions".to_string())
    })?;

    Ok(WeatherReport {
        temperature_c: kelvin_to_celsius(parsed.main.temp),
        feels_like_c: kelvin_to_celsius(parsed.main.feels_like),
        humidity_pct: parsed.main.humidity,
        high_c: kelvin_to_celsius(parsed.main.temp_max),
        low_c: kelvin_to_celsius(parsed.main.temp_min),
        description: condition.description,
        condition_id: condition.id,
    })
}

/// OpenWeather sends `cod` as a number on success and as a string on some
/// error bodies.
fn application_status(cod: Option<&Value>) -> Option<i64> {
    match cod? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse().ok()
        }
        _ => None,
    }
}

fn render_status(cod: Option<&Value>) -> String {
    match cod {
        None | Some(Value::Null) => "missing".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
