//! Field mapping for the Eastmoney push2 endpoints.
//!
//! Both endpoints speak in opaque `f`-codes. The single-quote endpoint
//! (`/api/qt/stock/get`) and the spot-list endpoint (`/api/qt/clist/get`)
//! use different code sets for the same concepts, so each has its own row
//! type here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::percent::{normalize_percent, parse_number};

/// Fields requested from the single-quote endpoint:
/// code/name/latest price/pct change/volume ratio/turnover rate/bid ratio/main net inflow.
pub const SINGLE_FIELDS: &str = "f57,f58,f43,f170,f50,f168,f191,f137";

/// Fields requested from the spot-list endpoint:
/// code/name/latest price/pct change/volume ratio/turnover rate.
pub const LIST_FIELDS: &str = "f12,f14,f15,f3,f10,f8";

/// Market selector covering Shanghai A + STAR and Shenzhen A + ChiNext.
pub const LIST_FS: &str = "m:0 t:6,m:0 t:80,m:1 t:2,m:1 t:23";

/// Fixed access token the public endpoints expect.
pub const UT_TOKEN: &str = "bd1d9ddb04089700cf9c27f6f7426281";

/// Map a 6-digit stock code to the `secid` the quote endpoint expects.
/// Codes starting with `6` trade in Shanghai (`1.`), everything else in
/// Shenzhen (`0.`).
pub fn code_to_secid(code: &str) -> String {
    let code = code.trim();
    if code.starts_with('6') {
        format!("1.{code}")
    } else {
        format!("0.{code}")
    }
}

/// A single stock's detail snapshot, mapped from the single-quote endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub code: Option<String>,
    pub name: Option<String>,
    pub latest_price: Option<f64>,
    pub pct_change: Option<f64>,
    pub volume_ratio: Option<f64>,
    pub turnover_rate: Option<f64>,
    pub bid_ratio: Option<f64>,
    pub main_net_inflow: Option<f64>,
}

impl Quote {
    /// Build a quote from the raw `data` section of a single-quote payload.
    /// Volume ratio and bid ratio go through the percent magnitude rule;
    /// the remaining numerics come back ready to use with `fltt=2`.
    pub fn from_em(data: &Map<String, Value>) -> Self {
        let get = |key: &str| data.get(key).cloned().unwrap_or(Value::Null);
        Self {
            code: get("f57").as_str().map(str::to_owned),
            name: get("f58").as_str().map(str::to_owned),
            latest_price: parse_number(&get("f43")),
            pct_change: parse_number(&get("f170")),
            volume_ratio: normalize_percent(&get("f50")),
            turnover_rate: parse_number(&get("f168")),
            bid_ratio: normalize_percent(&get("f191")),
            main_net_inflow: parse_number(&get("f137")),
        }
    }
}

/// One row of the paged spot list, percent fields normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListRow {
    pub code: Option<String>,
    pub name: Option<String>,
    pub latest_price: Option<f64>,
    pub pct_change: Option<f64>,
    pub volume_ratio: Option<f64>,
    pub turnover_rate: Option<f64>,
}

impl ListRow {
    pub fn from_em(item: &Value) -> Self {
        let get = |key: &str| item.get(key).cloned().unwrap_or(Value::Null);
        Self {
            code: get("f12").as_str().map(str::to_owned),
            name: get("f14").as_str().map(str::to_owned),
            latest_price: parse_number(&get("f15")),
            pct_change: normalize_percent(&get("f3")),
            volume_ratio: normalize_percent(&get("f10")),
            turnover_rate: normalize_percent(&get("f8")),
        }
    }
}

/// Envelope of the single-quote endpoint; `data` is null for unknown codes.
#[derive(Debug, Deserialize)]
pub(crate) struct SingleEnvelope {
    pub data: Option<Map<String, Value>>,
}

/// Envelope of the spot-list endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    pub data: Option<ListData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListData {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub diff: Vec<Value>,
}
