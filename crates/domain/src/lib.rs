//! # rotbot-domain
//!
//! Pure domain model for the rotbot status display.
//!
//! ## Responsibilities
//! - Define the **display state**: the single record of the latest sensor
//!   readings, the state label and its derived color
//! - Define **readings** (opaque sensor text, explicitly unset until written)
//! - Define **status updates** (partial merges built from request parameters)
//! - Own the state-label → color mapping
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod time;

pub mod color;
pub mod display_state;
pub mod reading;
pub mod update;
