use stockproject_market::MarketClient;

use crate::config::cors::CorsConfig;
use crate::config::market::MarketConfig;
use crate::config::server::ServerConfig;

/// Read-once process configuration plus the shared upstream client.
/// Built at startup and cloned into handlers; nothing here mutates after
/// boot.
#[derive(Clone, Debug)]
pub struct AppState {
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
    pub market_config: MarketConfig,
    pub market: MarketClient,
}

pub fn init_app_state() -> anyhow::Result<AppState> {
    let cors_config = CorsConfig::from_env();
    let server_config = ServerConfig::from_env();
    let market_config = MarketConfig::from_env();
    let market = MarketClient::new(
        &market_config.base_url,
        market_config.concurrency,
        market_config.page_size,
        market_config.timeout_secs,
    )?;

    Ok(AppState {
        cors_config,
        server_config,
        market_config,
        market,
    })
}
