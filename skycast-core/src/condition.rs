use std::fmt;

/// Visual symbol for a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Sun,
    CloudWithRain,
    SunBehindCloud,
    Cloud,
}

impl Glyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Sun => "\u{2600}\u{fe0f}",
            Glyph::CloudWithRain => "\u{1f327}\u{fe0f}",
            Glyph::SunBehindCloud => "\u{26c5}",
            Glyph::Cloud => "\u{2601}\u{fe0f}",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condition labels with a dedicated glyph. Matching is exact and case-sensitive.
const KNOWN_CONDITIONS: &[(&str, Glyph)] = &[
    ("Clear", Glyph::Sun),
    ("Sunny", Glyph::Sun),
    ("Patchy rain", Glyph::CloudWithRain),
    ("Partly cloudy", Glyph::SunBehindCloud),
    ("Cloudy", Glyph::Cloud),
    ("Patchy rain nearby", Glyph::CloudWithRain),
    ("Rainy", Glyph::CloudWithRain),
];

/// Maps a condition label to its glyph, falling back to [`Glyph::Cloud`].
pub fn classify(condition: &str) -> Glyph {
    let condition = condition.trim();
    KNOWN_CONDITIONS
        .iter()
        .find_map(|(label, glyph)| (*label == condition).then_some(*glyph))
        .unwrap_or(Glyph::Cloud)
}
