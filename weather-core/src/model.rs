use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Outcome of a single weather request. The error arm's `Display` is the
/// message shown to the user.
pub type WeatherResult = Result<WeatherReport, WeatherError>;

/// A validated city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    /// Trim the raw input; an empty city is rejected before any request is made.
    pub fn parse(raw: &str) -> Result<Self, WeatherError> {
        let city = raw.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyInput);
        }

        Ok(Self { city: city.to_string() })
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Current conditions for one city. Temperatures are in °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub high_c: f64,
    pub low_c: f64,
    pub description: String,
    pub condition_id: i64,
}
