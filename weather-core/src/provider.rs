use crate::{
    Config, WeatherError, WeatherQuery, WeatherResult, provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, query: &WeatherQuery) -> WeatherResult;
}

/// Validate the raw city text and, if it is usable, ask the provider.
/// Blank input never reaches the provider.
pub async fn lookup(provider: &dyn WeatherProvider, raw_city: &str) -> WeatherResult {
    let query = WeatherQuery::parse(raw_city)?;
    provider.get_weather(&query).await
}

/// Construct the OpenWeather provider from config. A missing API key is not
/// an error here; each request reports it instead.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    if config.api_key().is_none() {
        tracing::warn!("No OpenWeather API key configured; run `weather configure`");
    }

    OpenWeatherProvider::new(config.api_key().map(str::to_owned), &config.openweather)
        .map_err(|e: WeatherError| anyhow::anyhow!("Failed to build OpenWeather client: {e}"))
}
