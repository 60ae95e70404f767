//! Yahoo Finance data providers.

pub mod client;
pub mod quotes;
pub mod source;

pub use client::YahooFundamentalsClient;
pub use quotes::YahooMarketCapProvider;
pub use source::YahooFinancialsSource;
