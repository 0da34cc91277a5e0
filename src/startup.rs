//! Process bootstrap: logging, storage selection, and the serve loop.

use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::api;
use crate::app_state::AppState;
use crate::config::{LogFormat, ServiceConfig, StorageBackend};
use crate::error::StartupError;
use crate::persistence::{InMemoryPostStore, PostStore, PostgresPostStore};

/// Installs the global `tracing` subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// Opens the configured storage backend.
///
/// For Postgres this blocks until the database answers or the retry
/// budget from [`crate::config::DatabaseConfig::retry_policy`] runs out.
///
/// # Errors
///
/// Returns a [`StartupError`] if the database cannot be reached or the
/// schema cannot be created.
pub async fn open_store(config: &ServiceConfig) -> Result<Arc<dyn PostStore>, StartupError> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let policy = config.database.retry_policy();
            let store = PostgresPostStore::connect(&config.database, &policy).await?;
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; posts will not survive a restart");
            Ok(Arc::new(InMemoryPostStore::new()))
        }
    }
}

/// Opens storage, binds the listener, and serves until a shutdown signal.
///
/// # Errors
///
/// Returns a [`StartupError`] if storage cannot be opened or the listener
/// cannot be bound.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    tracing::info!(
        addr = %config.listen_addr,
        backend = ?config.storage_backend,
        "starting posts-api"
    );

    let store = open_store(&config).await?;
    let app = api::build_app(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::warn!("received Ctrl+C, shutting down"),
        () = terminate => tracing::warn!("received SIGTERM, shutting down"),
    }
}
