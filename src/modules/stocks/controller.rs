use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use validator::Validate;

use crate::modules::stocks::model::{
    QuoteQuery, QuoteResponse, ScreenerQuery, ScreenerResponse, is_valid_code,
};
use crate::modules::stocks::service::StockService;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[utoipa::path(
    get,
    path = "/api/stocks/{code}",
    params(
        ("code" = String, Path, description = "6-digit A-share stock code, e.g. 600519"),
        QuoteQuery
    ),
    responses(
        (status = 200, description = "Live quote snapshot", body = QuoteResponse),
        (status = 400, description = "Malformed stock code"),
        (status = 404, description = "Unknown stock code"),
        (status = 502, description = "Upstream market data unavailable")
    ),
    tag = "Stocks"
)]
#[instrument(skip(state))]
pub async fn get_quote(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<QuoteResponse>, AppError> {
    if !is_valid_code(&code) {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "stock code must be exactly 6 digits"
        )));
    }

    let quote = StockService::get_quote(&state, &code, query.raw).await?;

    Ok(Json(quote))
}

#[utoipa::path(
    get,
    path = "/api/stocks/screener",
    params(ScreenerQuery),
    responses(
        (status = 200, description = "Stocks passing both screen stages", body = ScreenerResponse),
        (status = 422, description = "Screen bounds out of range"),
        (status = 502, description = "Upstream market data unavailable")
    ),
    tag = "Stocks"
)]
#[instrument(skip(state))]
pub async fn run_screener(
    State(state): State<AppState>,
    Query(query): Query<ScreenerQuery>,
) -> Result<Json<ScreenerResponse>, AppError> {
    query
        .validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;
    if query.pct_change_min >= query.pct_change_max {
        return Err(AppError::unprocessable(anyhow::anyhow!(
            "pct_change_min must be below pct_change_max"
        )));
    }

    let result = StockService::run_screener(&state, query.into()).await?;

    Ok(Json(result))
}
