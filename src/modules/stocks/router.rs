use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_quote, run_screener};

pub fn init_stocks_router() -> Router<AppState> {
    Router::new()
        .route("/screener", get(run_screener))
        .route("/{code}", get(get_quote))
}
