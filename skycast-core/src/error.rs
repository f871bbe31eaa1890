use thiserror::Error;

/// Failure modes of a single forecast fetch. None of them are retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("failed to fetch weather data: {0}")]
    Network(#[source] reqwest::Error),

    #[error("API returned status {status} for city {city}")]
    ApiStatus { status: u16, city: String },

    #[error("failed to read response body: {0}")]
    Io(#[source] reqwest::Error),

    #[error("failed to parse weather data: {0}")]
    Decode(#[from] serde_json::Error),
}
