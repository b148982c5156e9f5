//! Process wiring: storage, router, listener.

use std::future::Future;

use super::router::create_router;
use super::transport::{bind, serve};
use super::types::AppState;
use crate::config::Config;
use crate::error::AppError;
use crate::storage::SqliteStorage;

/// Open storage, then serve until `shutdown` resolves.
///
/// Storage and schema are ready before the listener is bound, so a storage
/// failure means the port is never opened.
///
/// # Errors
///
/// Returns [`AppError`] if the database cannot be opened, the schema cannot
/// be created, the address cannot be bound, or the serve loop fails.
pub async fn run<F>(config: &Config, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr()?;

    tracing::info!("Opening database at {}", config.database_path);
    let storage = SqliteStorage::new(&config.database_path).await?;
    tracing::info!("Storage initialized");

    let router = create_router(AppState::new(storage.clone()));

    let listener = bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let result = serve(listener, router, shutdown).await;

    tracing::info!("Closing database");
    storage.close().await;

    result.map_err(AppError::from)
}
