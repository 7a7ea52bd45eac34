//! Turns a [`WeatherReport`] into the strings the views display.

use crate::model::WeatherReport;

const KELVIN_OFFSET: f64 = 273.15;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Symbol for an OpenWeather condition id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionIcon {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    VolcanicAsh,
    Squall,
    Tornado,
    Clear,
    Clouds,
    Blank,
}

impl ConditionIcon {
    /// Ranges are checked in order; ids outside every range are blank.
    pub fn from_condition_id(id: i64) -> Self {
        match id {
            200..=232 => Self::Thunderstorm,
            300..=321 => Self::Drizzle,
            500..=531 => Self::Rain,
            600..=622 => Self::Snow,
            701..=741 => Self::Atmosphere,
            762 => Self::VolcanicAsh,
            771 => Self::Squall,
            781 => Self::Tornado,
            800 => Self::Clear,
            801..=804 => Self::Clouds,
            _ => Self::Blank,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "🌩️",
            Self::Drizzle => "🌦️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Atmosphere => "🌫",
            Self::VolcanicAsh => "🌋",
            Self::Squall => "💨",
            Self::Tornado => "🌪️",
            Self::Clear => "☀️",
            Self::Clouds => "☁️",
            Self::Blank => " ",
        }
    }
}

impl WeatherReport {
    /// Five-line block for the temperature region.
    pub fn summary(&self) -> String {
        format!(
            "> Temperature: {:.0}°C\n\
             > Feels like: {:.0}°C\n\
             > Humidity: {:.0}% (rh)\n\
             > High: {:.0}°C\n\
             > Low: {:.0}°C",
            self.temperature_c, self.feels_like_c, self.humidity_pct, self.high_c, self.low_c,
        )
    }

    pub fn description_line(&self) -> String {
        format!("overall weather:\n{}", self.description)
    }

    pub fn icon(&self) -> ConditionIcon {
        ConditionIcon::from_condition_id(self.condition_id)
    }
}
