//! Router assembly and listener lifecycle.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::error::FetchError;
use crate::fetcher::ActivityFetcher;
use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(handlers::health))
    .route("/api/activity", get(handlers::activity))
    .layer(CorsLayer::permissive())
    .with_state(state)
}

/// Build the fetcher from config and wrap it in a router.
pub fn app(config: &Config) -> Result<Router, FetchError> {
  let fetcher = ActivityFetcher::try_new(&config.upstream)?;
  Ok(build_router(Arc::new(AppState { fetcher })))
}

pub async fn bind(addr: SocketAddr) -> std::io::Result<TcpListener> {
  TcpListener::bind(addr).await
}

/// Serve until the process exits. Each connection is handled on its own task.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
  axum::serve(listener, app).await
}
