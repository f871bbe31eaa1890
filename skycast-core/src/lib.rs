//! Core library for the `skycast` weather tools.
//!
//! This crate defines:
//! - The weatherapi.com forecast client and the provider seam around it
//! - Decoded forecast models
//! - Condition glyphs, line formatting and rain highlighting
//! - Configuration & API key resolution
//!
//! It is used by `skycast-cli` and `skycast-server`.

pub mod condition;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod present;
pub mod provider;
pub mod time_filter;

pub use condition::{Glyph, classify};
pub use config::Config;
pub use error::WeatherError;
pub use format::{format_current, format_hourly, hourly_lines};
pub use model::{ForecastQuery, FormattedLine, HourlyEntry, WeatherSnapshot};
pub use present::{Highlight, present};
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
pub use time_filter::is_upcoming;
