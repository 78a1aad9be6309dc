//! Sensor reading — opaque text as submitted by the sensor.

use serde::{Deserialize, Serialize};

/// Value of a single sensor field.
///
/// Readings are never parsed: whatever text the sensor sends is kept and
/// rendered as-is. A field that has never been written is [`Unset`](Self::Unset)
/// and renders as `0`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Reading {
    #[default]
    Unset,
    Value(String),
}

impl Reading {
    /// Text shown for a field that has never been written.
    pub const UNSET_TEXT: &'static str = "0";

    /// Text to display for this reading.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unset => Self::UNSET_TEXT,
            Self::Value(value) => value,
        }
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Option<String>> for Reading {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unset, Self::Value)
    }
}

impl From<Reading> for Option<String> {
    fn from(value: Reading) -> Self {
        match value {
            Reading::Unset => None,
            Reading::Value(value) => Some(value),
        }
    }
}
