use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::{
    error::WeatherError,
    model::{ForecastQuery, WeatherSnapshot},
};

use super::WeatherProvider;

pub const FORECAST_URL: &str = "https://api.weatherapi.com/v1/forecast.json";

/// Upper bound on a whole request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// weatherapi.com one-day forecast client.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Result<Self, WeatherError> {
        let http =
            Client::builder().timeout(REQUEST_TIMEOUT).build().map_err(WeatherError::Network)?;
        Ok(Self::with_client(api_key, http))
    }

    /// Use a caller-supplied HTTP client, e.g. one with a different timeout.
    pub fn with_client(api_key: String, http: Client) -> Self {
        Self { api_key, endpoint: FORECAST_URL.to_string(), http }
    }

    /// Point the client at another forecast endpoint (mock servers, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    async fn fetch_forecast(&self, query: &ForecastQuery) -> Result<WeatherSnapshot, WeatherError> {
        tracing::debug!(city = %query.city, endpoint = %self.endpoint, "requesting forecast");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&query.params())
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.without_url()))?;

        let status = res.status();
        if status != StatusCode::OK {
            tracing::warn!(city = %query.city, status = status.as_u16(), "forecast request rejected");
            return Err(WeatherError::ApiStatus { status: status.as_u16(), city: query.city.clone() });
        }

        let body = res.bytes().await.map_err(|e| WeatherError::Io(e.without_url()))?;
        tracing::debug!(city = %query.city, bytes = body.len(), "forecast received");

        let snapshot: WeatherSnapshot = serde_json::from_slice(&body)?;
        Ok(snapshot)
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn fetch(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let query = ForecastQuery::new(city, self.api_key.as_str());
        self.fetch_forecast(&query).await
    }
}
