//! Display color derived from the state label.

use serde::{Deserialize, Serialize};

/// Color used to render the state label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Green,
    Yellow,
    #[default]
    Red,
}

impl DisplayColor {
    /// Map a state label to its color.
    ///
    /// The match is exact and case-sensitive: only `GREEN` and `YELLOW` are
    /// recognised, everything else (including `green` and the empty label)
    /// is red.
    #[must_use]
    pub fn from_state(state: &str) -> Self {
        match state {
            "GREEN" => Self::Green,
            "YELLOW" => Self::Yellow,
            _ => Self::Red,
        }
    }

    /// CSS color name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl std::fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
