//! Server types and shared state.

use std::sync::Arc;

use crate::traits::RecordStore;

/// Shared application state for all handlers.
///
/// Holds the single store handle created at startup.
#[derive(Clone)]
pub struct AppState {
    /// Record store shared by every request.
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Creates a new application state that owns `store`.
    #[must_use]
    pub fn new(store: impl RecordStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
