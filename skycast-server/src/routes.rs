//! `GET /weather?city=<name>` returning the current-weather line as JSON.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;

use skycast_core::{Config, WeatherProvider, format_current};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
    pub config: Arc<Config>,
}

#[derive(Debug, Serialize)]
pub struct WeatherBody {
    pub weather: String,
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/weather", get(handle_weather)).with_state(state)
}

/// GET /weather — fetch and format the current conditions for one city.
/// Only the first `city` parameter counts; repeats are ignored.
pub async fn handle_weather(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let requested =
        params.into_iter().find(|(name, _)| name == "city").map(|(_, value)| value);
    let city = state.config.city_or_default(requested);
    tracing::info!(%city, "weather requested");

    match state.provider.fetch(&city).await {
        Ok(snapshot) => Json(WeatherBody { weather: format_current(&snapshot) }).into_response(),
        Err(err) => {
            tracing::error!(%city, error = %err, "weather fetch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error fetching weather: {err}"))
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, header},
    };
    use skycast_core::{
        WeatherError, WeatherSnapshot,
        model::{Condition, Current, Location},
    };
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Answers every city with a fixed snapshot, or a fixed status error.
    #[derive(Debug, Default)]
    struct StubProvider {
        fail_with: Option<u16>,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn fetch(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
            self.seen.lock().expect("lock").push(city.to_string());
            if let Some(status) = self.fail_with {
                return Err(WeatherError::ApiStatus { status, city: city.to_string() });
            }
            Ok(WeatherSnapshot {
                location: Location { name: city.to_string(), country: "Morocco".into() },
                current: Current { temp_c: 22.0, condition: Condition::new("Partly cloudy") },
                ..Default::default()
            })
        }
    }

    fn app(provider: Arc<StubProvider>) -> Router {
        router(AppState { provider, config: Arc::new(Config::default()) })
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("infallible");
        let status = res.status();
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("body");
        (status, content_type, String::from_utf8(bytes.to_vec()).expect("utf8"))
    }

    #[tokio::test]
    async fn returns_current_line_as_json() {
        let provider = Arc::new(StubProvider::default());
        let (status, content_type, body) =
            get_body(app(provider.clone()), "/weather?city=Casablanca").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let json: serde_json::Value = serde_json::from_str(&body).expect("json");
        assert_eq!(json["weather"], "Casablanca, Morocco: 22°C, Partly cloudy \u{26c5}");
        assert_eq!(*provider.seen.lock().expect("lock"), vec!["Casablanca".to_string()]);
    }

    #[tokio::test]
    async fn missing_city_uses_fallback() {
        let provider = Arc::new(StubProvider::default());
        let (status, _, _) = get_body(app(provider.clone()), "/weather").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(*provider.seen.lock().expect("lock"), vec!["Algiers".to_string()]);
    }

    #[tokio::test]
    async fn repeated_city_uses_first_value() {
        let provider = Arc::new(StubProvider::default());
        let (status, _, body) =
            get_body(app(provider.clone()), "/weather?city=Oran&city=Paris").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Oran, Morocco"));
        assert_eq!(*provider.seen.lock().expect("lock"), vec!["Oran".to_string()]);
    }

    #[tokio::test]
    async fn city_is_url_decoded() {
        let provider = Arc::new(StubProvider::default());
        let (status, _, _) = get_body(app(provider.clone()), "/weather?city=New%20York").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(*provider.seen.lock().expect("lock"), vec!["New York".to_string()]);
    }

    #[tokio::test]
    async fn fetch_failure_is_500_with_plain_text() {
        let provider = Arc::new(StubProvider { fail_with: Some(400), ..Default::default() });
        let (status, content_type, body) =
            get_body(app(provider), "/weather?city=InvalidCity").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(content_type.is_some_and(|ct| ct.starts_with("text/plain")));
        assert_eq!(body, "Error fetching weather: API returned status 400 for city InvalidCity");
    }
}
