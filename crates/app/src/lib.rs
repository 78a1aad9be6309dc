//! # rotbot-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the storage adapter implements:
//!   - `DisplayStateStore` — snapshot & atomic merge of the display state
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `StatusService` — record a sensor update, read the current state
//!
//! ## Dependency rule
//! Depends on `rotbot-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
