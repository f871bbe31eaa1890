//! HTTP entrypoint for skycast: one route, one upstream call per request.

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use skycast_core::{Config, WeatherApiProvider};

mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    let provider = WeatherApiProvider::new(config.resolve_api_key())?;
    let bind_addr = config.resolve_bind_addr();

    let app = routes::router(routes::AppState {
        provider: Arc::new(provider),
        config: Arc::new(config),
    });

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "skycast server listening");

    axum::serve(listener, app).await.context("Server terminated")?;

    Ok(())
}
