use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable holding the weatherapi.com key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Environment variable overriding the server bind address.
pub const BIND_ENV: &str = "SKYCAST_BIND";

/// Shared demonstration key, used only when nothing else is configured.
pub const DEMO_API_KEY: &str = "94474d04349f43008d395834240102";

pub const FALLBACK_CITY: &str = "Algiers";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Top-level configuration stored on disk. Every field is optional.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Oran"
/// bind_addr = "127.0.0.1:3000"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub default_city: Option<String>,
    pub bind_addr: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// `WEATHER_API_KEY`, then the config file, then [`DEMO_API_KEY`].
    pub fn resolve_api_key(&self) -> String {
        self.api_key_with_env(std::env::var(API_KEY_ENV).ok())
    }

    fn api_key_with_env(&self, env: Option<String>) -> String {
        non_empty(env)
            .or_else(|| non_empty(self.api_key.clone()))
            .unwrap_or_else(|| DEMO_API_KEY.to_string())
    }

    /// The requested city, else the configured default, else [`FALLBACK_CITY`].
    pub fn city_or_default(&self, requested: Option<String>) -> String {
        non_empty(requested)
            .or_else(|| non_empty(self.default_city.clone()))
            .unwrap_or_else(|| FALLBACK_CITY.to_string())
    }

    /// `SKYCAST_BIND`, then the config file, then [`DEFAULT_BIND_ADDR`].
    pub fn resolve_bind_addr(&self) -> String {
        non_empty(std::env::var(BIND_ENV).ok())
            .or_else(|| non_empty(self.bind_addr.clone()))
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
