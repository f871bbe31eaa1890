use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, WeatherError, WeatherSnapshot, provider::weatherapi::WeatherApiProvider};

pub mod weatherapi;

/// Source of forecast snapshots. One call is one upstream attempt.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, city: &str) -> Result<WeatherSnapshot, WeatherError>;
}

/// Construct the weatherapi.com provider using the key resolved from
/// the environment and `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolve_api_key();
    let provider = WeatherApiProvider::new(api_key)?;
    Ok(Box::new(provider))
}
