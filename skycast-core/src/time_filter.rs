use chrono::{DateTime, Local, TimeZone};

use crate::model::HourlyEntry;

/// True when `epoch` (seconds) is at or after `now`. Only strictly past
/// instants are rejected. Timestamps chrono cannot represent are treated as past.
pub fn is_upcoming(epoch: i64, now: &DateTime<Local>) -> bool {
    match Local.timestamp_opt(epoch, 0).single() {
        Some(at) => at >= *now,
        None => false,
    }
}

/// Entries that survive [`is_upcoming`] against a single cutoff, in source order.
pub fn upcoming<'a>(
    hours: &'a [HourlyEntry],
    now: &'a DateTime<Local>,
) -> impl Iterator<Item = &'a HourlyEntry> + 'a {
    hours.iter().filter(move |hour| is_upcoming(hour.time_epoch, now))
}
