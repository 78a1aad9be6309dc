//! # rotbot-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **status page** at `/`: every `GET` merges the optional
//!   `temp`, `humidity`, `light` and `state` query parameters into the
//!   display state, then renders the whole record as inline-styled HTML
//! - Serve a read-only **JSON snapshot** at `/api/status`
//! - Serve a liveness probe at `/health`
//!
//! ## Dependency rule
//! Depends on `rotbot-app` (for the port trait and service) and `rotbot-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod router;
pub mod state;
pub mod status_page;
