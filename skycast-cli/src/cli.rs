use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use std::io::{self, Write};

use skycast_core::{
    Config, Highlight, WeatherProvider, format_current, format_hourly, present,
    provider_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "skycast",
    version,
    about = "Current weather and the rest of today's hourly forecast",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// City to look up; defaults to the configured city, then Algiers.
    /// Use `skycast -- configure` for a city named like a subcommand.
    pub city: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store an API key and default city in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(Config::load()?),
            None => show(&lookup_config(Config::load()), self.city).await,
        }
    }
}

/// A lookup still works from env vars and fallbacks when the config file
/// can't be read.
fn lookup_config(loaded: anyhow::Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %format!("{err:#}"), "ignoring unreadable config");
        Config::default()
    })
}

async fn show(config: &Config, city: Option<String>) -> anyhow::Result<()> {
    let city = config.city_or_default(city);
    tracing::debug!(%city, "looking up weather");
    let provider = provider_from_config(config)?;

    let snapshot = provider.fetch(&city).await?;
    let now = chrono::Local::now();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", format_current(&snapshot))?;
    writeln!(out)?;

    let lines = format_hourly(&snapshot, &now);
    let highlight = Highlight::for_terminal(&console::Term::stdout());
    present(&mut out, &lines, &snapshot, &now, highlight)?;

    Ok(())
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("weatherapi.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Leave empty to keep the current value")
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let city = Text::new("Default city:")
        .with_default(&config.city_or_default(None))
        .prompt()
        .context("Failed to read default city")?;
    if !city.trim().is_empty() {
        config.default_city = Some(city.trim().to_string());
    }

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
