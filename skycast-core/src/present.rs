use std::io::{self, Write};

use chrono::{DateTime, Local};

use crate::{format::is_high_rain, model::WeatherSnapshot, time_filter::upcoming};

/// Whether the output sink can render colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Color,
    Plain,
}

impl Highlight {
    /// Colour when the sink is an interactive terminal.
    pub fn for_terminal(term: &console::Term) -> Self {
        if term.features().colors_supported() { Highlight::Color } else { Highlight::Plain }
    }

    fn paint(self, line: &str) -> String {
        match self {
            Highlight::Color => console::style(line).red().force_styling(true).to_string(),
            Highlight::Plain => line.to_string(),
        }
    }
}

/// Writes `lines` one per line, highlighting those whose hour has a high
/// chance of rain.
///
/// Lines are paired index-by-index with the upcoming hours of `snapshot`
/// under the same `now` that produced them. Extra hours without a line are
/// ignored; lines without a matching hour are not written.
pub fn present<W: Write>(
    out: &mut W,
    lines: &[String],
    snapshot: &WeatherSnapshot,
    now: &DateTime<Local>,
    highlight: Highlight,
) -> io::Result<()> {
    let Some(hours) = snapshot.first_day_hours() else {
        return Ok(());
    };

    for (line, hour) in lines.iter().zip(upcoming(hours, now)) {
        if is_high_rain(hour) {
            writeln!(out, "{}", highlight.paint(line))?;
        } else {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}
