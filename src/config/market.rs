use std::env;
use std::str::FromStr;

use tracing::warn;

/// Eastmoney upstream settings: endpoint base and fan-out tuning for the
/// paged list fetch and screener detail requests.
#[derive(Clone, Debug)]
pub struct MarketConfig {
    pub base_url: String,
    pub concurrency: usize,
    pub page_size: usize,
    pub timeout_secs: u64,
}

impl MarketConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("MARKET_BASE_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "https://push2.eastmoney.com".to_string()),
            concurrency: parse_or("MARKET_CONCURRENCY", 8),
            page_size: parse_or("MARKET_PAGE_SIZE", 1000),
            timeout_secs: parse_or("MARKET_TIMEOUT_SECS", 10),
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(var: &str, default: T) -> T {
    match env::var(var) {
        Err(_) => default,
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(%var, value = %raw, %default, "invalid value, using default");
            default
        }),
    }
}
