// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::boundary_cache::BoundaryCache;
use crate::application::dashboard_service::{BoundarySource, DashboardService};
use crate::infrastructure::config::{load_config, BoundaryMode};
use crate::infrastructure::geojson_repository::GeoJsonRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_page, health_check, map_artifact};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let app_config = load_config()?;

    // Boundary source (infrastructure layer)
    let source = match app_config.boundaries.mode {
        BoundaryMode::Static => BoundarySource::Static,
        BoundaryMode::Remote => {
            let repository = GeoJsonRepository::new(
                app_config.boundaries.url.clone(),
                app_config.boundaries.name_property.clone(),
                Duration::from_secs(app_config.boundaries.timeout_secs),
            )?;
            BoundarySource::Remote {
                repository: Arc::new(repository),
                cache: BoundaryCache::new(),
            }
        }
    };
    tracing::info!("Boundary source: {:?}", app_config.boundaries.mode);

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service: DashboardService::new(source),
    });

    // Build router (presentation layer)
    // Page compression is handled in html_response, so no CompressionLayer here
    let router = Router::new()
        .route("/", get(dashboard_page))
        .route("/api/map", get(map_artifact))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = app_config.server.bind.parse()?;
    tracing::info!("Starting newham-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
