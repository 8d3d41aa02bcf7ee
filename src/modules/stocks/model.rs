use serde::{Deserialize, Serialize};
use serde_json::Value;
use stockproject_market::{Quote, ScreenCriteria};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query string for the single-quote endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(default)]
pub struct QuoteQuery {
    /// Return the upstream `f`-coded fields untouched.
    pub raw: bool,
}

/// Envelope around a single quote, matching the shape the frontend expects:
/// `{"source":"em","code":...,"data":{...}}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteResponse {
    pub source: String,
    pub code: String,
    #[schema(value_type = Object)]
    pub data: Value,
}

/// Query string for the screener, defaults matching the classic
/// volume-ratio/turnover/momentum day-trade screen.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(default)]
pub struct ScreenerQuery {
    #[validate(range(min = -30.0, max = 30.0))]
    pub pct_change_min: f64,
    #[validate(range(min = -30.0, max = 30.0))]
    pub pct_change_max: f64,
    #[validate(range(min = 0.0))]
    pub volume_ratio_min: f64,
    #[validate(range(min = 0.0))]
    pub turnover_rate_min: f64,
    #[validate(range(min = -100.0, max = 100.0))]
    pub bid_ratio_min: f64,
    /// Cap on candidates re-checked against the detail endpoint; 0 = no cap.
    #[validate(range(max = 5000))]
    pub limit: usize,
}

impl Default for ScreenerQuery {
    fn default() -> Self {
        let defaults = ScreenCriteria::default();
        Self {
            pct_change_min: defaults.pct_change_min,
            pct_change_max: defaults.pct_change_max,
            volume_ratio_min: defaults.volume_ratio_min,
            turnover_rate_min: defaults.turnover_rate_min,
            bid_ratio_min: defaults.bid_ratio_min,
            limit: defaults.limit,
        }
    }
}

impl From<ScreenerQuery> for ScreenCriteria {
    fn from(query: ScreenerQuery) -> Self {
        Self {
            pct_change_min: query.pct_change_min,
            pct_change_max: query.pct_change_max,
            volume_ratio_min: query.volume_ratio_min,
            turnover_rate_min: query.turnover_rate_min,
            bid_ratio_min: query.bid_ratio_min,
            limit: query.limit,
        }
    }
}

/// Screener result set.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScreenerResponse {
    pub source: String,
    pub count: usize,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Quote>,
}

/// A-share codes are exactly six ASCII digits.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit())
}
