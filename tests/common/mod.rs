use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use stockproject::config::cors::CorsConfig;
use stockproject::config::market::MarketConfig;
use stockproject::config::server::ServerConfig;
use stockproject::router::init_router;
use stockproject::state::AppState;
use stockproject_market::MarketClient;
use tower::ServiceExt;

/// Build an app wired to the given upstream base URL (usually an httpmock
/// server) with an explicit CORS allow-list.
#[allow(dead_code)]
pub fn setup_test_app_with_origins(base_url: &str, origins: Vec<String>) -> Router {
    let market_config = MarketConfig {
        base_url: base_url.to_string(),
        concurrency: 4,
        page_size: 100,
        timeout_secs: 5,
    };
    let market = MarketClient::new(
        &market_config.base_url,
        market_config.concurrency,
        market_config.page_size,
        market_config.timeout_secs,
    )
    .unwrap();

    let state = AppState {
        cors_config: CorsConfig {
            allowed_origins: origins,
        },
        server_config: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        market_config,
        market,
    };
    init_router(state)
}

pub fn setup_test_app(base_url: &str) -> Router {
    setup_test_app_with_origins(base_url, vec!["http://localhost:5173".to_string()])
}

#[allow(dead_code)]
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}
