//! Normalization of percent-like values from Eastmoney payloads.
//!
//! Upstream mixes plain numbers, `"12.3%"` strings, and values scaled by 100
//! (e.g. `-624` meaning `-6.24%`), depending on the endpoint and field.

use serde_json::Value;

/// Parse a percent-like value without rescaling. `"12.3%"` and `12.3` both
/// become `12.3`; anything unparseable becomes `None`.
pub fn parse_percent_like(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok(),
        _ => None,
    }
}

/// Parse a percent-like value and apply the magnitude rule: an absolute value
/// above 100 is taken to be scaled by 100 and divided back down.
pub fn normalize_percent(value: &Value) -> Option<f64> {
    let num = parse_percent_like(value)?;
    if num.abs() > 100.0 {
        Some(num / 100.0)
    } else {
        Some(num)
    }
}

/// Plain numeric extraction for non-percent fields (prices, net inflow).
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_percent_like(&json!(2.5)), Some(2.5));
        assert_eq!(parse_percent_like(&json!(-3)), Some(-3.0));
    }

    #[test]
    fn parses_percent_strings() {
        assert_eq!(parse_percent_like(&json!("12.3%")), Some(12.3));
        assert_eq!(parse_percent_like(&json!(" 7% ")), Some(7.0));
    }

    #[test]
    fn unparseable_is_none() {
        assert_eq!(parse_percent_like(&json!("-")), None);
        assert_eq!(parse_percent_like(&json!(null)), None);
        assert_eq!(parse_percent_like(&json!([1])), None);
    }

    #[test]
    fn magnitude_rule_rescales_only_above_100() {
        assert_eq!(normalize_percent(&json!(-624)), Some(-6.24));
        assert_eq!(normalize_percent(&json!(250.0)), Some(2.5));
        assert_eq!(normalize_percent(&json!(99.9)), Some(99.9));
        assert_eq!(normalize_percent(&json!(-100)), Some(-100.0));
    }

    #[test]
    fn numbers_from_strings() {
        assert_eq!(parse_number(&json!("1845.01")), Some(1845.01));
        assert_eq!(parse_number(&json!(42)), Some(42.0));
        assert_eq!(parse_number(&json!("n/a")), None);
    }
}
