//! Application builder: wires state, router and background tasks into a
//! running server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;

use portal_auth::{RateLimitSweeper, StaticCredentialStore};
use portal_core::config::AppConfig;
use portal_core::error::AppError;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the portal server until Ctrl+C / SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(environment = %config.environment, "Starting portal server...");

    // ── Step 1: Credential table ─────────────────────────────────
    let credentials = Arc::new(StaticCredentialStore::load(&config.auth.users_file)?);

    // ── Step 2: Shared state ─────────────────────────────────────
    let addr = config.server.bind_address();
    let sweep_interval = config.rate_limit.sweep_interval_seconds;
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = AppState::new(config, credentials);

    // ── Step 3: Shutdown channel & sweeper ───────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let sweeper_handle = if sweep_interval > 0 {
        let sweeper = RateLimitSweeper::new(
            state.rate_limiter.as_ref().clone(),
            Duration::from_secs(sweep_interval),
        );
        Some(tokio::spawn(async move {
            sweeper.run(shutdown_rx).await;
        }))
    } else {
        tracing::info!("Rate limit sweeper disabled");
        None
    };

    // ── Step 4: HTTP server ──────────────────────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(address = %addr, "Portal server listening");

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(handle) = sweeper_handle {
        if tokio::time::timeout(grace, handle).await.is_err() {
            tracing::warn!("Rate limit sweeper did not stop within the grace period");
        }
    }

    tracing::info!("Portal server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received");
}
