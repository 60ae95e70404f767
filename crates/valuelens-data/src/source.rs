//! Sources of quarterly financials.

use crate::error::{DataError, Result};
use crate::financials::QuarterlyFinancials;
use crate::ticker::Ticker;
use async_trait::async_trait;
use std::collections::HashMap;

/// Anything that can produce quarterly statements for a ticker.
#[async_trait]
pub trait FinancialsSource: Send + Sync {
    /// Short name for logs and the UI.
    fn name(&self) -> &'static str;

    /// Fetch the quarterly statement bundle for `ticker`.
    ///
    /// # Errors
    ///
    /// Implementations return [`DataError::MissingData`] when the provider
    /// answers with no statements at all.
    async fn fetch_quarterly(&self, ticker: &Ticker) -> Result<QuarterlyFinancials>;
}

/// A source serving fixed, in-memory statements.
#[derive(Debug, Clone, Default)]
pub struct StaticFinancialsSource {
    entries: HashMap<Ticker, QuarterlyFinancials>,
    fallback: bool,
}

impl StaticFinancialsSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Source that answers every ticker with the built-in sample statements.
    pub fn sample() -> Self {
        Self {
            entries: HashMap::new(),
            fallback: true,
        }
    }

    /// Add statements for their ticker, replacing any previous entry.
    pub fn with(mut self, financials: QuarterlyFinancials) -> Self {
        self.insert(financials);
        self
    }

    /// Add statements for their ticker, replacing any previous entry.
    pub fn insert(&mut self, financials: QuarterlyFinancials) {
        self.entries.insert(financials.ticker.clone(), financials);
    }
}

#[async_trait]
impl FinancialsSource for StaticFinancialsSource {
    fn name(&self) -> &'static str {
        if self.fallback { "sample" } else { "static" }
    }

    async fn fetch_quarterly(&self, ticker: &Ticker) -> Result<QuarterlyFinancials> {
        if let Some(financials) = self.entries.get(ticker) {
            return Ok(financials.clone());
        }
        if self.fallback {
            return Ok(crate::fixtures::sample_financials(ticker.clone()));
        }
        Err(DataError::MissingData {
            symbol: ticker.to_string(),
            reason: "no statements loaded for this symbol".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_financials;

    #[tokio::test]
    async fn test_static_source_serves_entries() {
        let ticker = Ticker::parse("AAPL").unwrap();
        let source = StaticFinancialsSource::new().with(sample_financials(ticker.clone()));

        let fetched = source.fetch_quarterly(&ticker).await.unwrap();
        assert_eq!(fetched.ticker, ticker);
        assert_eq!(source.name(), "static");
    }

    #[tokio::test]
    async fn test_static_source_missing_ticker() {
        let source = StaticFinancialsSource::new();
        let result = source.fetch_quarterly(&Ticker::parse("MSFT").unwrap()).await;
        assert!(matches!(result, Err(DataError::MissingData { .. })));
    }

    #[tokio::test]
    async fn test_sample_source_answers_any_ticker() {
        let source = StaticFinancialsSource::sample();
        let ticker = Ticker::parse("DEMO").unwrap();
        let fetched = source.fetch_quarterly(&ticker).await.unwrap();
        assert_eq!(fetched.ticker.as_str(), "DEMO");
        assert!(!fetched.is_empty());
    }
}
