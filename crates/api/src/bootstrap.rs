//! Process startup: logging, dependency construction and serving.
//!
//! Everything a request handler depends on is built here, once, before the
//! listener binds. The dependency chain is:
//!
//! ```text
//! ServerConfig -> DbPool (connect, health check, migrate) -> AppState -> Router
//! ```
//!
//! Any failure along that chain is a [`BootstrapError`] and aborts startup;
//! no handler can observe a half-built state.

use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ConfigError, LogFormat, ServerConfig};
use crate::router::build_app_router;
use crate::state::AppState;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "discog_api=debug,discog_db=debug,tower_http=debug";

/// A fatal startup failure.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database unavailable: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Install the global tracing subscriber.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

/// Construct the shared application state.
///
/// Connects the pool, verifies it answers a query and applies pending
/// migrations.
pub async fn build_state(config: ServerConfig) -> Result<AppState, BootstrapError> {
    let pool = discog_db::create_pool(&config.database_url, config.db_max_connections).await?;
    tracing::info!(
        max_connections = config.db_max_connections,
        "Database connection pool created"
    );

    discog_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    discog_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(AppState {
        pool,
        config: Arc::new(config),
    })
}

/// Bind the listener and serve until SIGINT/SIGTERM.
pub async fn serve(state: AppState) -> Result<(), BootstrapError> {
    let addr = state.config.socket_addr()?;
    let pool = state.pool.clone();
    let app = build_app_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix). If a handler cannot
/// be installed, that branch never fires and the other one still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl-C handler");
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
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
