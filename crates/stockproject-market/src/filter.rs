//! Screening criteria for the two-stage stock screen.
//!
//! Stage one runs over the cheap spot-list rows; stage two re-checks each
//! surviving code against its detail quote, which carries the bid ratio the
//! list endpoint does not expose.

use crate::model::{ListRow, Quote};

/// Bounds applied by the screener. Percent values are plain percentages
/// (`2.0` means 2%).
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenCriteria {
    pub pct_change_min: f64,
    pub pct_change_max: f64,
    pub volume_ratio_min: f64,
    pub turnover_rate_min: f64,
    pub bid_ratio_min: f64,
    /// Cap on candidates carried into stage two; 0 means no cap.
    pub limit: usize,
}

impl Default for ScreenCriteria {
    fn default() -> Self {
        Self {
            pct_change_min: 2.0,
            pct_change_max: 5.0,
            volume_ratio_min: 5.0,
            turnover_rate_min: 1.0,
            bid_ratio_min: 20.0,
            limit: 0,
        }
    }
}

impl ScreenCriteria {
    /// Stage-one test: pct change strictly inside the band, volume ratio and
    /// turnover rate above their floors. Rows with any bound field missing
    /// fail closed.
    pub fn matches_list_row(&self, row: &ListRow) -> bool {
        let (Some(pct), Some(vr), Some(tr)) =
            (row.pct_change, row.volume_ratio, row.turnover_rate)
        else {
            return false;
        };
        pct > self.pct_change_min
            && pct < self.pct_change_max
            && vr > self.volume_ratio_min
            && tr > self.turnover_rate_min
    }

    /// Stage-two test: bid ratio present and at or above the floor.
    pub fn matches_quote(&self, quote: &Quote) -> bool {
        quote.bid_ratio.is_some_and(|wb| wb >= self.bid_ratio_min)
    }

    /// Codes of stage-one survivors, capped by `limit`.
    pub fn candidate_codes(&self, rows: &[ListRow]) -> Vec<String> {
        let mut codes: Vec<String> = rows
            .iter()
            .filter(|row| self.matches_list_row(row))
            .filter_map(|row| row.code.clone())
            .collect();
        if self.limit > 0 && codes.len() > self.limit {
            codes.truncate(self.limit);
        }
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, pct: f64, vr: f64, tr: f64) -> ListRow {
        ListRow {
            code: Some(code.to_string()),
            name: None,
            latest_price: None,
            pct_change: Some(pct),
            volume_ratio: Some(vr),
            turnover_rate: Some(tr),
        }
    }

    #[test]
    fn stage_one_band_is_exclusive() {
        let c = ScreenCriteria::default();
        assert!(c.matches_list_row(&row("a", 3.0, 6.0, 2.0)));
        assert!(!c.matches_list_row(&row("b", 2.0, 6.0, 2.0)));
        assert!(!c.matches_list_row(&row("c", 5.0, 6.0, 2.0)));
        assert!(!c.matches_list_row(&row("d", 3.0, 5.0, 2.0)));
        assert!(!c.matches_list_row(&row("e", 3.0, 6.0, 1.0)));
    }

    #[test]
    fn missing_fields_fail_closed() {
        let c = ScreenCriteria::default();
        let mut r = row("a", 3.0, 6.0, 2.0);
        r.pct_change = None;
        assert!(!c.matches_list_row(&r));
    }

    #[test]
    fn candidate_codes_respects_limit() {
        let c = ScreenCriteria {
            limit: 2,
            ..Default::default()
        };
        let rows = vec![
            row("a", 3.0, 6.0, 2.0),
            row("b", 4.0, 7.0, 2.0),
            row("c", 3.5, 8.0, 2.0),
            row("d", 1.0, 8.0, 2.0),
        ];
        assert_eq!(c.candidate_codes(&rows), vec!["a", "b"]);
    }

    #[test]
    fn stage_two_bid_ratio_floor() {
        let c = ScreenCriteria::default();
        let mut quote = Quote {
            code: None,
            name: None,
            latest_price: None,
            pct_change: None,
            volume_ratio: None,
            turnover_rate: None,
            bid_ratio: Some(25.0),
            main_net_inflow: None,
        };
        assert!(c.matches_quote(&quote));
        quote.bid_ratio = Some(19.9);
        assert!(!c.matches_quote(&quote));
        quote.bid_ratio = None;
        assert!(!c.matches_quote(&quote));
    }
}
