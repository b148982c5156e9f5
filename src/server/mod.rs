//! HTTP server implementation.
//!
//! This module provides:
//! - Request and response body types
//! - The `write` and `query/all` handlers
//! - Error-to-response mapping
//! - Router construction and the serve loop
//!
//! # Example
//!
//! ```no_run
//! use records_service::server::{bind, create_router, serve, shutdown_signal, AppState};
//! use records_service::storage::SqliteStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = SqliteStorage::new("./data.db").await?;
//! let router = create_router(AppState::new(storage));
//! let listener = bind("0.0.0.0:8080".parse()?).await?;
//! serve(listener, router, shutdown_signal()).await?;
//! # Ok(())
//! # }
//! ```

mod app;
mod error;
mod handlers;
mod requests;
mod responses;
mod router;
mod transport;
mod types;

pub use app::run;
pub use error::ApiError;
pub use handlers::{not_found_handler, query_all_handler, write_handler};
pub use requests::WriteRequest;
pub use responses::{
    QueryAllResponse, RecordView, WriteResponse, STATUS_SUCCESS, WRITE_SUCCESS_MESSAGE,
};
pub use router::create_router;
pub use transport::{bind, serve, shutdown_signal};
pub use types::AppState;
