//! # rotbot-adapter-storage-memory
//!
//! In-process implementation of the [`DisplayStateStore`] port.
//!
//! ## Responsibilities
//! - Own the single [`DisplayState`] for the lifetime of the process
//! - Apply each update under one write lock so the four fields move together
//!
//! ## Dependency rule
//! Depends on `rotbot-app` (for the port trait) and `rotbot-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

use tokio::sync::RwLock;

use rotbot_app::ports::DisplayStateStore;
use rotbot_domain::display_state::DisplayState;
use rotbot_domain::time::now;
use rotbot_domain::update::StatusUpdate;

/// Display state held in memory behind a read/write lock.
///
/// Nothing is persisted: a restart brings the record back to its defaults.
#[derive(Debug, Default)]
pub struct InMemoryDisplayStateStore {
    state: RwLock<DisplayState>,
}

impl InMemoryDisplayStateStore {
    /// Create a store holding the default record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayStateStore for InMemoryDisplayStateStore {
    async fn snapshot(&self) -> DisplayState {
        self.state.read().await.clone()
    }

    async fn apply(&self, update: StatusUpdate) -> DisplayState {
        let mut state = self.state.write().await;
        state.apply(update, now());
        state.clone()
    }
}
