//! Presentation strings for the "current" and "hourly" views.
//!
//! Temperatures and rain chances are rounded to whole numbers, ties to even.

use chrono::{DateTime, Local, TimeZone};

use crate::{
    condition::classify,
    model::{FormattedLine, HourlyEntry, WeatherSnapshot},
    time_filter::upcoming,
};

/// Rain chance (percent) at or above which an hour is highlighted.
pub const HIGH_RAIN_CHANCE: f64 = 50.0;

/// `"<name>, <country>: <temp>°C, <condition> <glyph>"`
pub fn format_current(snapshot: &WeatherSnapshot) -> String {
    let location = &snapshot.location;
    let condition = snapshot.current.condition.text.trim();

    format!(
        "{}, {}: {}°C, {} {}",
        location.name,
        location.country,
        whole(snapshot.current.temp_c),
        condition,
        classify(condition),
    )
}

/// Hourly lines for the first forecast day, skipping hours before `now`.
pub fn format_hourly(snapshot: &WeatherSnapshot, now: &DateTime<Local>) -> Vec<String> {
    hourly_lines(snapshot, now).into_iter().map(|line| line.text).collect()
}

/// Like [`format_hourly`], keeping the high-rain flag alongside each line.
pub fn hourly_lines(snapshot: &WeatherSnapshot, now: &DateTime<Local>) -> Vec<FormattedLine> {
    let Some(hours) = snapshot.first_day_hours() else {
        return Vec::new();
    };

    upcoming(hours, now)
        .map(|hour| FormattedLine {
            text: format_hour(hour),
            highlight: is_high_rain(hour),
        })
        .collect()
}

pub fn is_high_rain(hour: &HourlyEntry) -> bool {
    hour.chance_of_rain >= HIGH_RAIN_CHANCE
}

/// `"<HH:MM> - <temp>°C, <rain>%, <condition> <glyph>"`
fn format_hour(hour: &HourlyEntry) -> String {
    let condition = hour.condition.text.trim();

    format!(
        "{} - {}°C, {}%, {} {}",
        local_clock(hour.time_epoch),
        whole(hour.temp_c),
        whole(hour.chance_of_rain),
        condition,
        classify(condition),
    )
}

fn local_clock(epoch: i64) -> String {
    Local
        .timestamp_opt(epoch, 0)
        .single()
        .map(|at| at.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Nearest whole number, ties to even.
fn whole(value: f64) -> String {
    format!("{value:.0}")
}
