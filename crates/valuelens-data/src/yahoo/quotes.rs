//! Latest price lookup from Yahoo Finance.

use crate::error::{DataError, Result};
use crate::ticker::Ticker;
use yahoo_finance_api as yahoo;

/// Yahoo Finance quote provider used to price the share count.
pub struct YahooMarketCapProvider {
    provider: yahoo::YahooConnector,
}

impl std::fmt::Debug for YahooMarketCapProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooMarketCapProvider").finish_non_exhaustive()
    }
}

impl YahooMarketCapProvider {
    /// Create a new quote provider.
    pub fn new() -> Result<Self> {
        Ok(Self {
            provider: yahoo::YahooConnector::new()?,
        })
    }

    /// Latest daily close for a symbol.
    pub async fn latest_close(&self, ticker: &Ticker) -> Result<f64> {
        let response = self
            .provider
            .get_latest_quotes(ticker.as_str(), "1d")
            .await?;
        let quote = response.last_quote()?;

        if !quote.close.is_finite() || quote.close <= 0.0 {
            return Err(DataError::MissingData {
                symbol: ticker.to_string(),
                reason: "no usable closing price".to_string(),
            });
        }
        Ok(quote.close)
    }

    /// Market capitalisation as latest close times shares outstanding.
    pub async fn market_cap(&self, ticker: &Ticker, shares_outstanding: f64) -> Result<f64> {
        if !(shares_outstanding.is_finite() && shares_outstanding > 0.0) {
            return Err(DataError::MissingData {
                symbol: ticker.to_string(),
                reason: "share count unavailable".to_string(),
            });
        }
        Ok(self.latest_close(ticker).await? * shares_outstanding)
    }
}
