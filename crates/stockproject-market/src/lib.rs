//! # Stockproject Market
//!
//! Eastmoney (东方财富) market-data client for the stockproject API.
//!
//! This crate talks to the public push2 HTTP endpoints and turns their
//! `f`-coded payloads into typed rows:
//!
//! - [`client`]: async HTTP client for the single-quote and spot-list endpoints
//! - [`model`]: field mapping between `f`-codes and named quote fields
//! - [`percent`]: normalization of percent-like upstream values
//! - [`filter`]: screening criteria applied to list rows and detail quotes
//! - [`error`]: crate error type
//!
//! # Example
//!
//! ```ignore
//! use stockproject_market::{MarketClient, ScreenCriteria};
//!
//! let client = MarketClient::new("https://push2.eastmoney.com", 8, 1000, 10)?;
//! let quote = client.fetch_quote("600519").await?;
//! let picks = client.screen(&ScreenCriteria::default()).await?;
//! ```

pub mod client;
pub mod error;
pub mod filter;
pub mod model;
pub mod percent;

// Re-export commonly used types at crate root
pub use client::MarketClient;
pub use error::MarketError;
pub use filter::ScreenCriteria;
pub use model::{ListRow, Quote, code_to_secid};
