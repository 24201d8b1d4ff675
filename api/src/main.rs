//! tl;dr News API Server
//!
//! Serves daily news summaries (Markdown stored as `news/<date>.md`) as
//! `tldr.news.v1` messages, plus the site's stateless report endpoint.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::FsSummaryStore;
use app::NewsService;
use config::Config;
use domain::ports::SummaryStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService<dyn SummaryStore>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Liveness / readiness probe body
async fn heartbeat() -> &'static str {
    "."
}

fn cors_layer(allowed: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
        .allow_credentials(false)
}

/// Build the full router for the given state
pub fn build_router(state: AppState) -> Router {
    let news_routes = Router::new()
        .route("/news", get(handlers::list_news))
        .route("/news/:date", get(handlers::get_news))
        .route("/report", any(handlers::report));

    Router::new()
        // Health checks
        .route("/health", get(health))
        .route("/healthz", get(heartbeat))
        .route("/readyz", get(heartbeat))
        .nest("/api", news_routes)
        // Middleware
        .layer(cors_layer(&state.config.allowed_cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tldr_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting tl;dr news API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let fs_store = FsSummaryStore::new(&config.summaries_dir);
    tracing::info!("Serving summaries from {}", fs_store.root().display());
    let store: Arc<dyn SummaryStore> = Arc::new(fs_store);

    // Create application services
    let news_service = Arc::new(NewsService::new(store));

    let state = AppState {
        news_service,
        config: config.clone(),
    };

    let app = build_router(state);

    // Start server
    let addr = config.bind_address();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
