//! JSON handlers.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;

use rotbot_app::ports::DisplayStateStore;
use rotbot_domain::display_state::DisplayState;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: DisplayStateStore + 'static,
{
    Router::new().route("/status", get(status::<S>))
}

/// `GET /api/status` — current display state, without merging anything.
pub async fn status<S>(State(state): State<AppState<S>>) -> Json<DisplayState>
where
    S: DisplayStateStore + 'static,
{
    Json(state.status_service.current().await)
}
