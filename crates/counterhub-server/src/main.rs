//! counterhub server binary.
//!
//! - Config: `$COUNTERHUB_CONFIG` or `counterhub.yaml`, defaults if absent
//! - Logging: `RUST_LOG` (default `info`)
//! - Graceful shutdown on Ctrl+C / SIGTERM; `/readyz` reports draining first

use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use counterhub_core::error::{CounterError, Result};
use counterhub_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(err = %e, "counterhub-server exited with error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_or_default()?;
    let listen = cfg.server.listen_addr()?;
    let grace = Duration::from_millis(cfg.server.shutdown_grace_ms);

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| CounterError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "counterhub-server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state, grace))
        .await
        .map_err(|e| CounterError::Internal(format!("server failed: {e}")))?;

    tracing::info!("counterhub-server stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState, grace: Duration) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(err = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(err = %e, "failed to install SIGTERM handler");
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

    state.set_draining();
    tracing::info!(grace_ms = grace.as_millis() as u64, "shutdown requested, draining");
    if !grace.is_zero() {
        tokio::time::sleep(grace).await;
    }
}
