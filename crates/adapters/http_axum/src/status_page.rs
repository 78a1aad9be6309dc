//! Status page — the server-side rendered RotBot results page.
//!
//! Every `GET /` is both a write and a read: known query parameters are
//! merged into the display state first, then the resulting record is
//! rendered. A request with no parameters just shows the current values.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};

use rotbot_app::ports::DisplayStateStore;
use rotbot_domain::color::DisplayColor;
use rotbot_domain::display_state::DisplayState;
use rotbot_domain::update::StatusUpdate;

use crate::state::AppState;

/// Status page template.
///
/// Interpolated values are HTML-escaped by askama, so submitted text is
/// shown verbatim.
#[derive(Debug, Template)]
#[template(
    ext = "html",
    source = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>RotBot Results</title></head>\
<body style='margin: 50px 50px 50px 50px; color: white; background-color: black; font-size: 200%;'>\
<h1 style='font-family:courier; text-align:left;'>RotBot Results</h1>\
<h2 style='font-family:courier; text-align:left; color:{{ color }}; font-size: 200%;'> {{ state }}</h2>\
<p style='font-family:courier; text-align:left;'>Temperature: {{ temperature }}°C</p>\
<p style='font-family:courier; text-align:left;'>Humidity: {{ humidity }}</p>\
<p style='font-family:courier; text-align:left;'>Light: {{ light }}</p>\
</body></html>"
)]
pub struct StatusPage {
    state: String,
    color: DisplayColor,
    temperature: String,
    humidity: String,
    light: String,
}

impl StatusPage {
    #[must_use]
    pub fn new(state: DisplayState) -> Self {
        Self {
            temperature: state.temperature.to_string(),
            humidity: state.humidity.to_string(),
            light: state.light.to_string(),
            color: state.color,
            state: state.state,
        }
    }
}

impl IntoResponse for StatusPage {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — merge query parameters, then render the current state.
///
/// When a key repeats, only its first occurrence counts (an empty first
/// value means no update). Unknown keys are ignored.
pub async fn index<S>(
    State(state): State<AppState<S>>,
    Query(params): Query<Vec<(String, String)>>,
) -> StatusPage
where
    S: DisplayStateStore + 'static,
{
    let update = StatusUpdate::from_params(|key| first_value(&params, key));
    StatusPage::new(state.status_service.record(update).await)
}

fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}
