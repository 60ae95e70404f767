#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/valuelens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod financials;
pub mod fixtures;
pub mod source;
pub mod statement;
pub mod ticker;
pub mod yahoo;

pub use config::ProviderConfig;
pub use error::{DataError, Result};
pub use financials::QuarterlyFinancials;
pub use source::{FinancialsSource, StaticFinancialsSource};
pub use statement::{LineItem, QuarterlyStatement, StatementKind, StatementTable};
pub use ticker::Ticker;
pub use yahoo::YahooFinancialsSource;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
