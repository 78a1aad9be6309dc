//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use rotbot_app::ports::DisplayStateStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the status page at `/`, the JSON API under `/api` and a health
/// probe. Includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: DisplayStateStore + 'static,
{
    Router::new()
        .route("/", get(crate::status_page::index::<S>))
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
