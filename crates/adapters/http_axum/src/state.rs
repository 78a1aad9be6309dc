//! Shared application state for axum handlers.

use std::sync::Arc;

use rotbot_app::ports::DisplayStateStore;
use rotbot_app::services::status_service::StatusService;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Display state use-cases.
    pub status_service: Arc<StatusService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            status_service: Arc::clone(&self.status_service),
        }
    }
}

impl<S> AppState<S>
where
    S: DisplayStateStore + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(status_service: StatusService<S>) -> Self {
        Self {
            status_service: Arc::new(status_service),
        }
    }
}
