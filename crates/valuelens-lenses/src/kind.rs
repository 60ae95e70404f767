//! Lens identifiers.

use crate::error::LensError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five superinvestor lenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensKind {
    /// Cheapness on EV/EBITDA and EV/EBIT, checked against FCF yield
    #[default]
    Burry,
    /// Magic Formula: earnings yield plus return on capital
    Greenblatt,
    /// Owner earnings and ROIC
    Buffett,
    /// Asset-based margin of safety
    Klarman,
    /// Relative value on EV multiples
    Einhorn,
}

impl LensKind {
    /// All lenses in selector order.
    pub const ALL: [Self; 5] = [
        Self::Burry,
        Self::Greenblatt,
        Self::Buffett,
        Self::Klarman,
        Self::Einhorn,
    ];

    /// Lowercase key used in URLs, CLI flags and file names.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Burry => "burry",
            Self::Greenblatt => "greenblatt",
            Self::Buffett => "buffett",
            Self::Klarman => "klarman",
            Self::Einhorn => "einhorn",
        }
    }

    /// Full name, as reported in the verdict.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Burry => "Burry (EV/EBITDA)",
            Self::Greenblatt => "Greenblatt (Magic Formula)",
            Self::Buffett => "Buffett (Owner Earnings / ROIC)",
            Self::Klarman => "Klarman (Asset / Margin of Safety)",
            Self::Einhorn => "Einhorn (Relative Value)",
        }
    }

    /// Short label for lens selectors.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Klarman => "Klarman (Asset / MoS)",
            other => other.name(),
        }
    }

    /// One-line description.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Burry => "Cheapness via EV/EBITDA and EV/EBIT, sanity-checked with FCF yield.",
            Self::Greenblatt => "Magic Formula: earnings yield (EBIT/EV) plus return on capital.",
            Self::Buffett => "FCF yield plus the ability to reinvest at a high ROIC.",
            Self::Klarman => "Asset-based margin of safety: price to book and net current assets.",
            Self::Einhorn => "Relative value via EV multiples; peer context is left to the reader.",
        }
    }
}

impl fmt::Display for LensKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LensKind {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| LensError::UnknownLens(s.to_string()))
    }
}
