//! Configuration modules for the stockproject API.
//!
//! Each submodule owns one aspect of configuration, loaded from environment
//! variables once at startup and carried in [`crate::state::AppState`] for
//! the process lifetime.
//!
//! # Modules
//!
//! - [`cors`]: CORS allow-list configuration
//! - [`market`]: Eastmoney upstream endpoint and fan-out tuning
//! - [`server`]: listen host/port
//!
//! Malformed values never abort startup; they fall back to defaults with a
//! warning.

pub mod cors;
pub mod market;
pub mod server;
