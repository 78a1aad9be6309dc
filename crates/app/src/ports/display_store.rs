//! Display state store port — where the single display record lives.

use std::future::Future;

use rotbot_domain::display_state::DisplayState;
use rotbot_domain::update::StatusUpdate;

/// Owner of the process-wide [`DisplayState`].
///
/// Implementations must apply an update as one unit: a concurrent reader
/// sees either all fields of an update or none of them.
pub trait DisplayStateStore: Send + Sync {
    /// Return a copy of the current record.
    fn snapshot(&self) -> impl Future<Output = DisplayState> + Send;

    /// Merge `update` into the record and return the resulting copy.
    fn apply(&self, update: StatusUpdate) -> impl Future<Output = DisplayState> + Send;
}
