// ABOUTME: Shared application state for the grocerd HTTP server.
// ABOUTME: Wraps the list store so every handler sees the same file-backed list.

use std::sync::Arc;

use grocerd_store::ListStore;

/// Shared application state accessible by all axum handlers.
/// The store exclusively owns the in-memory list and its backing file.
pub struct AppState {
    pub store: ListStore,
}

/// Type alias for the Arc-wrapped state used with axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create a new AppState around an opened list store.
    pub fn new(store: ListStore) -> Self {
        Self { store }
    }
}
