//! Display state — the single record rendered by the status page.

use serde::{Deserialize, Serialize};

use crate::color::DisplayColor;
use crate::reading::Reading;
use crate::time::Timestamp;
use crate::update::StatusUpdate;

/// Latest sensor readings, state label and derived color.
///
/// `color` always reflects the most recently written `state`; it is only
/// ever recomputed inside [`apply`](Self::apply).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayState {
    pub temperature: Reading,
    pub humidity: Reading,
    pub light: Reading,
    pub state: String,
    pub color: DisplayColor,
    /// When any field was last overwritten. `None` until the first update.
    pub updated_at: Option<Timestamp>,
}

impl DisplayState {
    /// Merge `update` into this record.
    ///
    /// Fields absent from the update keep their value. When `state` is
    /// present the color is recomputed from it. Returns `true` if any
    /// field was written.
    pub fn apply(&mut self, update: StatusUpdate, now: Timestamp) -> bool {
        if update.is_empty() {
            return false;
        }
        if let Some(value) = update.temperature {
            self.temperature = Reading::Value(value);
        }
        if let Some(value) = update.humidity {
            self.humidity = Reading::Value(value);
        }
        if let Some(value) = update.light {
            self.light = Reading::Value(value);
        }
        if let Some(state) = update.state {
            self.color = DisplayColor::from_state(&state);
            self.state = state;
        }
        self.updated_at = Some(now);
        true
    }
}
