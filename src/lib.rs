//! # stockProject API
//!
//! Backend for the stockProject frontend, built with Axum on tokio. It
//! serves live Chinese A-share quotes from the public Eastmoney push2
//! endpoints and runs a two-stage market screener over the full spot list.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Env-driven configuration (CORS, server, market)
//! ├── modules/          # Feature modules
//! │   ├── system/      # Health check, root marker, favicon
//! │   └── stocks/      # Quote lookup and screener
//! ├── logging.rs        # tracing setup + request logging middleware
//! ├── metrics.rs        # Prometheus metrics endpoint and middleware
//! ├── router.rs         # Main application router (CORS, docs, routes)
//! └── state.rs          # Read-once application state
//! crates/
//! └── stockproject-market/  # Eastmoney client, field mapping, screen logic
//! ```
//!
//! Each feature module follows a consistent structure: `controller.rs` for
//! HTTP handlers, `service.rs` for logic, `model.rs` for DTOs, `router.rs`
//! for route wiring.
//!
//! ## Environment variables
//!
//! ```bash
//! ALLOWED_ORIGINS=http://localhost:5173,http://127.0.0.1:5173
//! HOST=0.0.0.0
//! PORT=8000
//! MARKET_BASE_URL=https://push2.eastmoney.com
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar` while the
//! server is running.

pub mod config;
pub mod docs;
pub mod logging;
pub mod metrics;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;

// Re-export workspace crates for convenience
pub use stockproject_market;
