//! Tenki HTTP Server
//!
//! Main entry point for the forecast web app.

use std::{sync::Arc, time::Duration};

use application::{ForecastService, GeocodingPort, IconMapping, Presenter, WeatherPort};
use infrastructure::{
    AppConfig, DEFAULT_LOG_FILTER, GeocodingAdapter, TemplateEngine, WeatherAdapter, init_tracing,
};
use presentation_http::{routes, server, state::AppState};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::load();
    let log_format = loaded
        .as_ref()
        .map(|c| c.server.log_format)
        .unwrap_or_default();

    // Initialize tracing
    init_tracing(log_format, DEFAULT_LOG_FILTER)?;

    info!("Tenki v{} starting...", env!("CARGO_PKG_VERSION"));

    // A missing config.toml is fine; a present but invalid one is not
    let config = loaded.inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        default_city = %config.display.default_city,
        language = %config.display.language,
        "Configuration loaded"
    );

    // Initialize adapters
    let weather: Arc<dyn WeatherPort> = Arc::new(
        WeatherAdapter::with_config(config.weather.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?,
    );
    let geocoder: Arc<dyn GeocodingPort> = Arc::new(
        GeocodingAdapter::with_config(&config.weather, config.display.language)
            .map_err(|e| anyhow::anyhow!("Failed to initialize geocoder: {e}"))?,
    );

    // Icon table is built once and shared read-only
    let icons = Arc::new(IconMapping::new());
    let presenter = Presenter::new(icons, config.display.language);
    let forecast_service = ForecastService::new(weather, geocoder, presenter);

    let templates = TemplateEngine::with_config(config.templates.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize templates: {e}"))?;

    let addr = config.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    let state = AppState {
        forecast_service: Arc::new(forecast_service),
        templates: Arc::new(templates),
        config: Arc::new(config),
    };

    let app = routes::create_router(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    server::serve(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
