//! Application state.

use std::sync::Arc;

use cafe_catalog_store::SqliteStore;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
///
/// The storage handle is injected here rather than living in a process-wide
/// singleton; every handler receives it through the axum `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<SqliteStore>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<SqliteStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }
}
