//! Network-backed [`FinancialsSource`].

use super::client::YahooFundamentalsClient;
use super::quotes::YahooMarketCapProvider;
use crate::config::ProviderConfig;
use crate::error::Result;
use crate::financials::QuarterlyFinancials;
use crate::source::FinancialsSource;
use crate::statement::LineItem;
use crate::ticker::Ticker;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Statements from the fundamentals time series, priced with the latest quote.
#[derive(Debug)]
pub struct YahooFinancialsSource {
    statements: YahooFundamentalsClient,
    quotes: Option<YahooMarketCapProvider>,
}

impl YahooFinancialsSource {
    /// Create a source from provider settings.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        Ok(Self {
            statements: YahooFundamentalsClient::with_config(config)?,
            quotes: Some(YahooMarketCapProvider::new()?),
        })
    }

    /// Use only the time series, taking the provider's trailing market cap.
    pub fn without_quotes(config: &ProviderConfig) -> Result<Self> {
        Ok(Self {
            statements: YahooFundamentalsClient::with_config(config)?,
            quotes: None,
        })
    }
}

#[async_trait]
impl FinancialsSource for YahooFinancialsSource {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    async fn fetch_quarterly(&self, ticker: &Ticker) -> Result<QuarterlyFinancials> {
        let financials = self.statements.fetch_statements(ticker).await?;

        let (Some(quotes), Some(shares)) = (&self.quotes, financials.mrq(LineItem::SharesOutstanding))
        else {
            return Ok(financials);
        };

        match quotes.market_cap(ticker, shares).await {
            Ok(market_cap) => {
                debug!(symbol = %ticker, market_cap, "priced share count");
                Ok(financials.with_market_cap(Some(market_cap)))
            }
            Err(e) => {
                warn!(symbol = %ticker, error = %e, "falling back to trailing market cap");
                Ok(financials)
            }
        }
    }
}
