//! What the three display regions currently show.

use weather_core::{WeatherReport, WeatherResult};

use crate::sound::SoundCue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Error,
    Success,
}

/// Styling of the temperature region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureStyle {
    Plain,
    /// Small red text.
    Error,
    /// Medium white text.
    Report,
}

impl TemperatureStyle {
    pub fn font_size(&self) -> f32 {
        match self {
            Self::Plain => 75.0,
            Self::Error => 15.0,
            Self::Report => 25.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    mode: Mode,
    temperature: String,
    temperature_style: TemperatureStyle,
    icon: String,
    description: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            mode: Mode::Idle,
            temperature: String::new(),
            temperature_style: TemperatureStyle::Plain,
            icon: " ".to_string(),
            description: String::new(),
        }
    }
}

impl ViewState {
    /// Replaces whatever is displayed with the outcome of a query and returns
    /// the cue that goes with it.
    pub fn apply(&mut self, result: &WeatherResult) -> SoundCue {
        match result {
            Ok(report) => {
                self.show_report(report);
                SoundCue::Click
            }
            Err(err) => {
                self.show_error(&err.to_string());
                SoundCue::Error
            }
        }
    }

    pub fn show_error(&mut self, message: &str) {
        self.mode = Mode::Error;
        self.temperature_style = TemperatureStyle::Error;
        self.temperature = message.to_string();
        self.icon.clear();
        self.description.clear();
    }

    pub fn show_report(&mut self, report: &WeatherReport) {
        self.mode = Mode::Success;
        self.temperature_style = TemperatureStyle::Report;
        self.temperature = report.summary();
        self.icon = report.icon().symbol().to_string();
        self.description = report.description_line();
    }

    pub fn is_error(&self) -> bool {
        self.mode == Mode::Error
    }

    pub fn temperature(&self) -> &str {
        &self.temperature
    }

    pub fn temperature_style(&self) -> TemperatureStyle {
        self.temperature_style
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
