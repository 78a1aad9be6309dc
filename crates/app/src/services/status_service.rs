//! Status service — use-cases for recording and reading the display state.

use rotbot_domain::display_state::DisplayState;
use rotbot_domain::update::StatusUpdate;

use crate::ports::DisplayStateStore;

/// Application service in front of the display state store.
pub struct StatusService<S> {
    store: S,
}

impl<S: DisplayStateStore> StatusService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Merge a (possibly empty) sensor update and return the state to render.
    ///
    /// An empty update is not an error: it leaves the record untouched and
    /// returns the current snapshot.
    pub async fn record(&self, update: StatusUpdate) -> DisplayState {
        if update.is_empty() {
            return self.store.snapshot().await;
        }
        tracing::debug!(
            temperature = update.temperature.as_deref(),
            humidity = update.humidity.as_deref(),
            light = update.light.as_deref(),
            state = update.state.as_deref(),
            "recording status update"
        );
        let current = self.store.apply(update).await;
        tracing::debug!(color = %current.color, "display state updated");
        current
    }

    /// Return the current display state without changing it.
    pub async fn current(&self) -> DisplayState {
        self.store.snapshot().await
    }
}
