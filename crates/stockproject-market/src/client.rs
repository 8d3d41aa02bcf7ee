//! Async client for the Eastmoney push2 endpoints.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::error::{MarketError, Result};
use crate::filter::ScreenCriteria;
use crate::model::{
    LIST_FIELDS, LIST_FS, ListEnvelope, ListRow, Quote, SINGLE_FIELDS, SingleEnvelope, UT_TOKEN,
    code_to_secid,
};

#[derive(Debug, Clone)]
pub struct MarketClient {
    http: reqwest::Client,
    base_url: String,
    concurrency: usize,
    page_size: usize,
}

impl MarketClient {
    pub fn new(
        base_url: impl Into<String>,
        concurrency: usize,
        page_size: usize,
        timeout_secs: u64,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            concurrency: concurrency.max(1),
            page_size: page_size.max(100),
        })
    }

    /// Raw `data` section for one code, `f`-codes untouched.
    /// [`MarketError::UnknownCode`] when upstream returns a null section.
    pub async fn fetch_quote_raw(&self, code: &str) -> Result<Map<String, Value>> {
        let url = format!("{}/api/qt/stock/get", self.base_url);
        let secid = code_to_secid(code);
        let envelope: SingleEnvelope = self
            .http
            .get(&url)
            .query(&[
                ("secid", secid.as_str()),
                ("fields", SINGLE_FIELDS),
                ("fltt", "2"),
                ("invt", "2"),
                ("ut", UT_TOKEN),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        envelope.data.ok_or_else(|| MarketError::UnknownCode {
            code: code.to_string(),
        })
    }

    /// Mapped detail snapshot for one code.
    pub async fn fetch_quote(&self, code: &str) -> Result<Quote> {
        Ok(Quote::from_em(&self.fetch_quote_raw(code).await?))
    }

    async fn fetch_list_page(&self, pn: usize) -> Result<ListEnvelope> {
        let url = format!("{}/api/qt/clist/get", self.base_url);
        let pn = pn.to_string();
        let pz = self.page_size.to_string();
        let envelope = self
            .http
            .get(&url)
            .query(&[
                ("pn", pn.as_str()),
                ("pz", pz.as_str()),
                ("po", "1"),
                ("np", "1"),
                ("ut", UT_TOKEN),
                ("fltt", "2"),
                ("invt", "2"),
                ("fid", "f3"),
                ("fs", LIST_FS),
                ("fields", LIST_FIELDS),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope)
    }

    /// The full A-share spot list. Page 1 establishes the total row count;
    /// remaining pages are fetched concurrently under the configured bound.
    pub async fn fetch_spot_list(&self) -> Result<Vec<ListRow>> {
        let first = self.fetch_list_page(1).await?;
        let Some(data) = first.data else {
            return Ok(Vec::new());
        };
        let mut rows: Vec<ListRow> = data.diff.iter().map(ListRow::from_em).collect();
        let total = match data.total {
            Some(total) if total > 0 => total as usize,
            _ => rows.len(),
        };
        let pages = total.div_ceil(self.page_size);
        if pages <= 1 {
            return Ok(rows);
        }

        let sem = Arc::new(Semaphore::new(self.concurrency));
        let mut set = JoinSet::new();
        for pn in 2..=pages {
            let client = self.clone();
            let sem = Arc::clone(&sem);
            set.spawn(async move {
                let _permit = sem
                    .acquire_owned()
                    .await
                    .map_err(|_| MarketError::payload("list fetch semaphore closed"))?;
                client.fetch_list_page(pn).await
            });
        }
        while let Some(joined) = set.join_next().await {
            let envelope =
                joined.map_err(|e| MarketError::payload(format!("list page task failed: {e}")))??;
            if let Some(data) = envelope.data {
                rows.extend(data.diff.iter().map(ListRow::from_em));
            }
        }
        Ok(rows)
    }

    /// Two-stage screen over the whole market: filter spot-list rows on the
    /// cheap bounds, then confirm each candidate against its detail quote.
    /// A failed detail fetch drops that candidate, never the whole screen.
    pub async fn screen(&self, criteria: &ScreenCriteria) -> Result<Vec<Quote>> {
        let rows = self.fetch_spot_list().await?;
        let codes = criteria.candidate_codes(&rows);
        debug!(
            listed = rows.len(),
            candidates = codes.len(),
            "stage-one screen complete"
        );
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let sem = Arc::new(Semaphore::new(self.concurrency));
        let mut set = JoinSet::new();
        for code in codes {
            let client = self.clone();
            let sem = Arc::clone(&sem);
            let criteria = criteria.clone();
            set.spawn(async move {
                let Ok(_permit) = sem.acquire_owned().await else {
                    return None;
                };
                match client.fetch_quote(&code).await {
                    Ok(quote) if criteria.matches_quote(&quote) => Some(quote),
                    Ok(_) => None,
                    Err(err) => {
                        warn!(%code, error = %err, "detail fetch failed, dropping candidate");
                        None
                    }
                }
            });
        }
        let mut picks = Vec::new();
        while let Some(joined) = set.join_next().await {
            if let Ok(Some(quote)) = joined {
                picks.push(quote);
            }
        }
        Ok(picks)
    }
}
