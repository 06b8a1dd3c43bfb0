use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

mod config;
mod error;
mod handlers;
mod kvs;
mod middleware;
mod models;
mod repository;
mod service;

use crate::config::Config;
use crate::kvs::KvStore;
use crate::repository::KvsFruitRepository;
use crate::service::FruitService;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FruitService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fruits_api=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    // Wire the layers explicitly: store → repository → service → router.
    let store = Arc::new(KvStore::new());
    let repo = Arc::new(KvsFruitRepository::new(store));
    let service = Arc::new(FruitService::new(repo));
    let app = build_router(AppState { service });

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))
        // ── Fruits ──────────────────────────────────────────────────────────
        .route("/fruits", post(handlers::fruits::create_fruit))
        .route("/fruits/:id", get(handlers::fruits::get_fruit_by_id))
        .fallback(handlers::not_found)
        // ── Middleware (added innermost first; logging ends up outermost) ───
        .layer(from_fn(middleware::require_owner_header))
        .layer(from_fn(middleware::require_json_content_type))
        .layer(CorsLayer::permissive())
        .layer(from_fn(middleware::log_requests))
        .with_state(state)
}
