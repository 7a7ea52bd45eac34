//! Core library for the weather desktop app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client and its error taxonomy
//! - Shared domain models (queries, reports)
//! - Presentation of reports as display strings and icons
//!
//! It is used by `weather-gui` and `weather-cli`.

pub mod config;
pub mod error;
pub mod model;
pub mod presentation;
pub mod provider;

pub use config::{Config, OpenWeatherConfig, SoundConfig};
pub use error::WeatherError;
pub use model::{WeatherQuery, WeatherReport, WeatherResult};
pub use presentation::ConditionIcon;
pub use provider::{WeatherProvider, lookup, provider_from_config};
