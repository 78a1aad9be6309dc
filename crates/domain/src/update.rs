//! Status update — a partial merge into the display state.

/// Query parameter carrying the temperature reading.
pub const PARAM_TEMPERATURE: &str = "temp";
/// Query parameter carrying the humidity reading.
pub const PARAM_HUMIDITY: &str = "humidity";
/// Query parameter carrying the light reading.
pub const PARAM_LIGHT: &str = "light";
/// Query parameter carrying the state label.
pub const PARAM_STATE: &str = "state";

/// Fields a single request wants to overwrite.
///
/// `None` means "leave the current value alone". Empty input is folded into
/// `None` on construction, so a present field always carries text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusUpdate {
    pub temperature: Option<String>,
    pub humidity: Option<String>,
    pub light: Option<String>,
    pub state: Option<String>,
}

impl StatusUpdate {
    /// Build an update by looking up each known parameter.
    ///
    /// Unknown parameters are never asked for; absent and empty ones are
    /// dropped.
    pub fn from_params<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let take = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(str::to_string);
        Self {
            temperature: take(PARAM_TEMPERATURE),
            humidity: take(PARAM_HUMIDITY),
            light: take(PARAM_LIGHT),
            state: take(PARAM_STATE),
        }
    }

    #[must_use]
    pub fn with_temperature(mut self, value: impl Into<String>) -> Self {
        self.temperature = non_empty(value.into());
        self
    }

    #[must_use]
    pub fn with_humidity(mut self, value: impl Into<String>) -> Self {
        self.humidity = non_empty(value.into());
        self
    }

    #[must_use]
    pub fn with_light(mut self, value: impl Into<String>) -> Self {
        self.light = non_empty(value.into());
        self
    }

    #[must_use]
    pub fn with_state(mut self, value: impl Into<String>) -> Self {
        self.state = non_empty(value.into());
        self
    }

    /// Whether applying this update would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.humidity.is_none()
            && self.light.is_none()
            && self.state.is_none()
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
