//! HTTP front end for the risk calculator.
//!
//! Two read-only endpoints plus a liveness probe. No state is shared between
//! requests; the router carries no application state at all.

pub mod config;
pub mod error;
mod handlers;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use crate::config::ServerConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Calculation payloads are a handful of numbers.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the axum Router (useful for testing).
pub fn build_router() -> Router {
    // Any origin, no credentials: the UI may be served from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any);

    handlers::router()
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind, serve, and block until Ctrl+C or SIGTERM.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Risk API listening on {}", addr);

    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Risk API shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
