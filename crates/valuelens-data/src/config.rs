//! Provider settings.

use std::time::Duration;

/// Default Yahoo Finance query host.
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query2.finance.yahoo.com";

/// Default minimum interval between provider requests.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(250);

/// Default statement lookback; five quarters are needed for YoY growth.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 730;

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the Yahoo Finance statement provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL of the fundamentals time-series API
    pub base_url: String,
    /// Minimum interval between requests
    pub request_interval: Duration,
    /// How far back to request quarterly statements
    pub lookback_days: u32,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            request_interval: DEFAULT_REQUEST_INTERVAL,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ProviderConfig {
    /// Point the provider at a different host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the minimum interval between requests.
    pub const fn with_request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = interval;
        self
    }

    /// Set the statement lookback in days.
    pub const fn with_lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }
}
