use serde_json::Value;
use stockproject_market::ScreenCriteria;
use tracing::instrument;

use crate::metrics::{track_quote_fetched, track_screener_run};
use crate::modules::stocks::model::{QuoteResponse, ScreenerResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct StockService;

impl StockService {
    /// Single-quote lookup. `raw` skips the field mapping and returns the
    /// upstream `f`-coded section as-is.
    #[instrument(skip(state))]
    pub async fn get_quote(
        state: &AppState,
        code: &str,
        raw: bool,
    ) -> Result<QuoteResponse, AppError> {
        let data = if raw {
            let fields = state
                .market
                .fetch_quote_raw(code)
                .await
                .map_err(AppError::from_market)?;
            Value::Object(fields)
        } else {
            let quote = state
                .market
                .fetch_quote(code)
                .await
                .map_err(AppError::from_market)?;
            serde_json::to_value(quote)?
        };
        track_quote_fetched();

        Ok(QuoteResponse {
            source: "em".to_string(),
            code: code.to_string(),
            data,
        })
    }

    #[instrument(skip(state))]
    pub async fn run_screener(
        state: &AppState,
        criteria: ScreenCriteria,
    ) -> Result<ScreenerResponse, AppError> {
        let data = state
            .market
            .screen(&criteria)
            .await
            .map_err(AppError::from_market)?;
        track_screener_run(data.len());

        Ok(ScreenerResponse {
            source: "em".to_string(),
            count: data.len(),
            data,
        })
    }
}
