use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use tracing::info;
use weather_core::{Config, WeatherReport, lookup, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key used by the CLI and the desktop app.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "London" or "Rio de Janeiro".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(&api_key);
    config.save()?;

    let path = Config::config_file_path()?;
    info!(path = %path.display(), "Saved configuration");
    println!("Saved API key to {}", path.display());

    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    match lookup(&provider, city).await {
        Ok(report) => {
            println!("{}", render(&report));
            Ok(())
        }
        Err(err) => bail!("{err}"),
    }
}

fn render(report: &WeatherReport) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        report.summary(),
        report.icon().symbol(),
        report.description_line()
    )
}
