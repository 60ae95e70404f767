//! Validated stock ticker symbols.

use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest symbol accepted, e.g. `BRK-B` or `^GSPC` fit comfortably.
pub const MAX_TICKER_LEN: usize = 12;

/// A stock symbol, trimmed and upper-cased.
///
/// Immutable once parsed; a query is always made for exactly one ticker.
///
/// ```
/// use valuelens_data::Ticker;
///
/// let ticker: Ticker = " aapl ".parse().unwrap();
/// assert_eq!(ticker.as_str(), "AAPL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Parse and normalize a raw symbol.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidSymbol`] when the symbol is empty, too long,
    /// or contains characters other than letters, digits, `.`, `-`, `^` and `=`.
    pub fn parse(raw: &str) -> Result<Self> {
        let symbol = raw.trim().to_uppercase();

        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }
        if symbol.len() > MAX_TICKER_LEN {
            return Err(DataError::InvalidSymbol(format!(
                "{} is longer than {} characters",
                symbol, MAX_TICKER_LEN
            )));
        }
        if let Some(bad) = symbol
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')))
        {
            return Err(DataError::InvalidSymbol(format!(
                "{} contains unsupported character '{}'",
                symbol, bad
            )));
        }

        Ok(Self(symbol))
    }

    /// The normalized symbol.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = DataError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("AAPL", "AAPL")]
    #[case("  msft ", "MSFT")]
    #[case("brk-b", "BRK-B")]
    #[case("^gspc", "^GSPC")]
    #[case("shop.to", "SHOP.TO")]
    #[case("eurusd=x", "EURUSD=X")]
    fn test_parse_normalizes(#[case] raw: &str, #[case] expected: &str) {
        let ticker = Ticker::parse(raw).unwrap();
        assert_eq!(ticker.as_str(), expected);
        assert_eq!(ticker.to_string(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("AAPL MSFT")]
    #[case("$AAPL")]
    #[case("ABCDEFGHIJKLM")]
    fn test_parse_rejects(#[case] raw: &str) {
        assert!(matches!(Ticker::parse(raw), Err(DataError::InvalidSymbol(_))));
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let ticker: Ticker = serde_json::from_str("\"nvda\"").unwrap();
        assert_eq!(ticker.as_str(), "NVDA");
        assert_eq!(serde_json::to_string(&ticker).unwrap(), "\"NVDA\"");

        let bad: std::result::Result<Ticker, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
