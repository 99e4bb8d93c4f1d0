//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory store and services, then runs the Axum server until a
//! shutdown signal arrives.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::memory::MemoryLinkRepository;
use crate::routes::app_service;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Builds application state backed by a fresh in-memory store.
pub fn build_state(config: &Config) -> AppState {
    let link_repository: Arc<dyn LinkRepository> = Arc::new(MemoryLinkRepository::new());
    let link_service =
        LinkService::new(link_repository).with_max_attempts(config.shorten_max_attempts);

    AppState::new(Arc::new(link_service))
}

/// Runs the HTTP server with the given configuration.
///
/// Stops accepting connections on Ctrl-C or SIGTERM and lets in-flight requests
/// finish. Links are kept in memory only and are gone after shutdown.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    tracing::info!("In-memory link store ready");

    let app = app_service(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
