//! Binary crate for the weather desktop window.
//!
//! This crate focuses on:
//! - The single-window view and its display state
//! - UI sound effects

use eframe::egui;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use weather_core::Config;

use sound::{KiraOutput, SilentOutput, SoundBoard, VoiceOutput};

mod app;
mod sound;
mod view;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::load().unwrap_or_else(|err| {
        warn!(error = ?err, "Using default configuration");
        Config::default()
    });
    let provider = weather_core::provider_from_config(&config)?;
    let sounds = SoundBoard::new(open_output(&config));
    let app = app::WeatherApp::new(Box::new(provider), sounds)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Weather App")
            .with_inner_size([700.0, 700.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native("Weather App", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Weather window failed: {e}"))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Falls back to silence when the clips or the device are unavailable.
fn open_output(config: &Config) -> Box<dyn VoiceOutput> {
    let dir = match config.sounds_dir() {
        Ok(dir) => dir,
        Err(err) => {
            warn!(error = %err, "UI sounds disabled");
            return Box::new(SilentOutput);
        }
    };

    match KiraOutput::open(&dir, &config.sounds) {
        Ok(output) => Box::new(output),
        Err(err) => {
            warn!(error = %err, dir = %dir.display(), "UI sounds disabled");
            Box::new(SilentOutput)
        }
    }
}
