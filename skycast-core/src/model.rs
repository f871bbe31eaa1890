use serde::{Deserialize, Serialize};

/// A single forecast request: which city, under which API key.
#[derive(Debug, Clone)]
pub struct ForecastQuery {
    pub city: String,
    pub api_key: String,
}

impl ForecastQuery {
    pub fn new(city: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { city: city.into(), api_key: api_key.into() }
    }

    /// Query parameters for the one-day forecast endpoint.
    pub fn params(&self) -> [(&str, &str); 5] {
        [
            ("key", self.api_key.as_str()),
            ("q", self.city.as_str()),
            ("days", "1"),
            ("aqi", "no"),
            ("alerts", "no"),
        ]
    }
}

/// Decoded forecast response. Never mutated after decode.
///
/// `location`, `current` and every hour's epoch, temperature and condition
/// text are required; only the forecast block, icons and rain chance may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: Current,
    #[serde(default)]
    pub forecast: Forecast,
}

impl WeatherSnapshot {
    /// Hourly entries of the first forecast day, or `None` when the
    /// response carried no forecast days at all.
    pub fn first_day_hours(&self) -> Option<&[HourlyEntry]> {
        self.forecast.forecastday.first().map(|day| day.hour.as_slice())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    #[serde(default)]
    pub icon: String,
}

impl Condition {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), icon: String::new() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    #[serde(default)]
    pub hour: Vec<HourlyEntry>,
}

/// One hour of forecast, in the order the API returned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub time_epoch: i64,
    pub temp_c: f64,
    pub condition: Condition,
    /// 0-100.
    #[serde(default)]
    pub chance_of_rain: f64,
}

/// A rendered display line plus whether it should be highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedLine {
    pub text: String,
    pub highlight: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_body_without_icons_or_rain() {
        let body = r#"{
            "location": {"name": "TestCity", "country": "TestCountry"},
            "current": {"temp_c": 25.5, "condition": {"text": "Sunny"}},
            "forecast": {"forecastday": [{"hour": []}]}
        }"#;

        let snapshot: WeatherSnapshot = serde_json::from_str(body).expect("valid body");

        assert_eq!(snapshot.location.name, "TestCity");
        assert_eq!(snapshot.current.condition.icon, "");
        assert_eq!(snapshot.first_day_hours(), Some(&[][..]));
    }

    #[test]
    fn missing_forecast_means_no_days() {
        let body = r#"{
            "location": {"name": "A", "country": "B"},
            "current": {"temp_c": 1.0, "condition": {"text": "Cloudy", "icon": "//x.png"}}
        }"#;

        let snapshot: WeatherSnapshot = serde_json::from_str(body).expect("valid body");
        assert!(snapshot.first_day_hours().is_none());
    }

    #[test]
    fn missing_required_fields_fail_to_decode() {
        let no_current = r#"{"location": {"name": "A", "country": "B"}}"#;
        let no_epoch = r#"{
            "location": {"name": "A", "country": "B"},
            "current": {"temp_c": 1.0, "condition": {"text": "Cloudy"}},
            "forecast": {"forecastday": [{"hour": [{"temp_c": 2.0, "condition": {"text": "Rainy"}}]}]}
        }"#;

        assert!(serde_json::from_str::<WeatherSnapshot>(no_current).is_err());
        assert!(serde_json::from_str::<WeatherSnapshot>(no_epoch).is_err());
    }

    #[test]
    fn hourly_entries_keep_api_order() {
        let body = r#"{
            "location": {"name": "A", "country": "B"},
            "current": {"temp_c": 1.0, "condition": {"text": "Cloudy"}},
            "forecast": {"forecastday": [{"hour": [
                {"time_epoch": 200, "temp_c": 2.0, "condition": {"text": "Rainy"}, "chance_of_rain": 80},
                {"time_epoch": 100, "temp_c": 1.0, "condition": {"text": "Sunny"}, "chance_of_rain": 0}
            ]}]}
        }"#;

        let snapshot: WeatherSnapshot = serde_json::from_str(body).expect("valid body");
        let hours = snapshot.first_day_hours().expect("one day");

        assert_eq!(hours[0].time_epoch, 200);
        assert_eq!(hours[0].chance_of_rain, 80.0);
        assert_eq!(hours[1].time_epoch, 100);
    }

    #[test]
    fn query_params_request_one_day_without_extras() {
        let query = ForecastQuery::new("Oran", "KEY");
        let params = query.params();

        assert!(params.contains(&("key", "KEY")));
        assert!(params.contains(&("q", "Oran")));
        assert!(params.contains(&("days", "1")));
        assert!(params.contains(&("aqi", "no")));
        assert!(params.contains(&("alerts", "no")));
    }
}
