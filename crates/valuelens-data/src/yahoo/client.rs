//! Yahoo Finance fundamentals time-series client with rate limiting.

use crate::config::ProviderConfig;
use crate::error::{DataError, Result};
use crate::financials::QuarterlyFinancials;
use crate::statement::{LineItem, StatementKind, normalize_label};
use crate::ticker::Ticker;
use chrono::{Duration as ChronoDuration, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

/// Path of the fundamentals time-series endpoint.
const TIMESERIES_PATH: &str = "/ws/fundamentals-timeseries/v1/finance/timeseries";

/// Series carrying the provider's own market cap estimate.
pub(crate) const MARKET_CAP_SERIES: &str = "trailingMarketCap";

/// Yahoo rejects requests without a browser-like user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";

/// Wait applied on HTTP 429 when no `Retry-After` header is sent.
const DEFAULT_RETRY_AFTER_MS: u64 = 1000;

#[derive(Debug, Deserialize)]
struct TimeseriesEnvelope {
    timeseries: TimeseriesBody,
}

#[derive(Debug, Deserialize)]
struct TimeseriesBody {
    #[serde(default)]
    result: Vec<TimeseriesResult>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// One series; its points live under a key equal to the series type.
#[derive(Debug, Deserialize)]
struct TimeseriesResult {
    meta: TimeseriesMeta,
    #[serde(flatten)]
    series: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TimeseriesMeta {
    #[serde(rename = "type", default)]
    kinds: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DataPoint {
    as_of_date: NaiveDate,
    #[serde(default)]
    reported_value: Option<ReportedValue>,
}

#[derive(Debug, Deserialize)]
struct ReportedValue {
    raw: f64,
}

/// Rate limiter to keep a minimum spacing between requests
#[derive(Debug)]
struct RateLimiter {
    last_request: Option<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: None,
            min_interval,
        }
    }

    async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}

/// Time-series type key for a candidate label, e.g. `quarterlyTotalRevenue`.
fn series_key(label: &str) -> String {
    let compact: String = label.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    format!("quarterly{}", compact)
}

/// Every quarterly series requested, mapped to its statement and display label.
fn quarterly_series() -> Vec<(String, StatementKind, &'static str)> {
    let mut series: Vec<(String, StatementKind, &'static str)> = Vec::new();
    for item in LineItem::ALL {
        for label in item.candidates() {
            let key = series_key(label);
            if !series.iter().any(|(k, _, _)| *k == key) {
                series.push((key, item.statement(), label));
            }
        }
    }
    series
}

/// Yahoo Finance fundamentals time-series client
pub struct YahooFundamentalsClient {
    client: reqwest::Client,
    rate_limiter: Arc<Mutex<RateLimiter>>,
    base_url: String,
    lookback_days: u32,
}

impl YahooFundamentalsClient {
    /// Create a client with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(&ProviderConfig::default())
    }

    /// Create a client from provider settings.
    ///
    /// # Example
    /// ```no_run
    /// use valuelens_data::{ProviderConfig, yahoo::YahooFundamentalsClient};
    /// use std::time::Duration;
    ///
    /// # fn example() -> valuelens_data::Result<()> {
    /// let config = ProviderConfig::default().with_request_interval(Duration::from_millis(500));
    /// let client = YahooFundamentalsClient::with_config(&config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(config: &ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(config.request_interval))),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            lookback_days: config.lookback_days,
        })
    }

    /// Fetch quarterly income, balance sheet and cash flow tables.
    ///
    /// The market cap on the returned bundle is the provider's trailing
    /// estimate, if it published one.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MissingData`] when no quarterly series come back,
    /// which the provider does transiently; the caller should retry later.
    pub async fn fetch_statements(&self, ticker: &Ticker) -> Result<QuarterlyFinancials> {
        let series = quarterly_series();
        let mut types: Vec<&str> = series.iter().map(|(k, _, _)| k.as_str()).collect();
        types.push(MARKET_CAP_SERIES);

        let period2 = Utc::now();
        let period1 = period2 - ChronoDuration::days(i64::from(self.lookback_days));
        let url = format!("{}{}/{}", self.base_url, TIMESERIES_PATH, ticker);

        self.rate_limiter.lock().await.wait().await;

        debug!(symbol = %ticker, series = types.len(), "requesting fundamentals time series");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", ticker.as_str().to_string()),
                ("type", types.join(",")),
                ("period1", period1.timestamp().to_string()),
                ("period2", period2.timestamp().to_string()),
            ])
            .send()
            .await
            .map_err(DataError::Network)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_ms = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map_or(DEFAULT_RETRY_AFTER_MS, |secs| secs * 1000);
            return Err(DataError::RateLimit { retry_after_ms });
        }
        if !status.is_success() {
            return Err(DataError::Http(format!(
                "fundamentals request for {} failed: HTTP {}",
                ticker, status
            )));
        }

        let body = response.text().await.map_err(DataError::Network)?;
        let envelope: TimeseriesEnvelope = serde_json::from_str(&body)?;
        if let Some(error) = envelope.timeseries.error.filter(|e| !e.is_null()) {
            return Err(DataError::YahooApi(error.to_string()));
        }

        let financials = Self::assemble(ticker, &series, envelope.timeseries.result)?;
        if financials.is_empty() {
            warn!(symbol = %ticker, "provider returned no quarterly statements");
            return Err(DataError::MissingData {
                symbol: ticker.to_string(),
                reason: "the provider returned no quarterly statements; this is often transient, \
                         please retry in a moment"
                    .to_string(),
            });
        }

        debug!(
            symbol = %ticker,
            latest = ?financials.latest_period(),
            "assembled quarterly statements"
        );
        Ok(financials)
    }

    fn assemble(
        ticker: &Ticker,
        series: &[(String, StatementKind, &'static str)],
        results: Vec<TimeseriesResult>,
    ) -> Result<QuarterlyFinancials> {
        let lookup: HashMap<String, (StatementKind, &'static str)> = series
            .iter()
            .map(|(key, kind, label)| (normalize_label(key), (*kind, *label)))
            .collect();
        let market_cap_key = normalize_label(MARKET_CAP_SERIES);

        let mut financials = QuarterlyFinancials::new(ticker.clone());
        let mut market_cap: Option<(NaiveDate, f64)> = None;

        for mut result in results {
            let Some(kind_key) = result.meta.kinds.first().cloned() else {
                continue;
            };
            let Some(raw_points) = result.series.remove(&kind_key) else {
                continue;
            };
            let points: Vec<Option<DataPoint>> = serde_json::from_value(raw_points)
                .map_err(|e| DataError::Parse(format!("series {}: {}", kind_key, e)))?;
            let points = points
                .into_iter()
                .flatten()
                .filter_map(|p| p.reported_value.map(|v| (p.as_of_date, v.raw)));

            let normalized = normalize_label(&kind_key);
            if normalized == market_cap_key {
                market_cap = points.fold(market_cap, |latest, (date, value)| match latest {
                    Some((d, _)) if d >= date => latest,
                    _ => Some((date, value)),
                });
            } else if let Some((kind, label)) = lookup.get(&normalized) {
                let table = financials.statement_mut(*kind);
                for (date, value) in points {
                    table.insert(*label, date, value);
                }
            } else {
                debug!(series = %kind_key, "ignoring unrequested series");
            }
        }

        Ok(financials.with_market_cap(market_cap.map(|(_, v)| v)))
    }
}

impl std::fmt::Debug for YahooFundamentalsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooFundamentalsClient")
            .field("base_url", &self.base_url)
            .field("lookback_days", &self.lookback_days)
            .finish_non_exhaustive()
    }
}
