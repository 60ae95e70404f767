//! Buffett Lens
//!
//! Owner earnings measured as FCF yield, and the ability to reinvest at a
//! high ROIC.

use super::{Lens, holds, pct};
use crate::kind::LensKind;
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};
use valuelens_metrics::ValuationMetrics;

/// Configuration for the Buffett lens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuffettConfig {
    /// Minimum FCF yield for a reasonable price (default: 0.05)
    pub min_fcf_yield: f64,
    /// Minimum ROIC for a great business (default: 0.15)
    pub min_roic: f64,
}

impl Default for BuffettConfig {
    fn default() -> Self {
        Self {
            min_fcf_yield: 0.05,
            min_roic: 0.15,
        }
    }
}

/// Buffett (Owner Earnings / ROIC) lens
#[derive(Debug, Default)]
pub struct BuffettLens {
    config: BuffettConfig,
}

impl Lens for BuffettLens {
    type Config = BuffettConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn kind(&self) -> LensKind {
        LensKind::Buffett
    }

    fn evaluate(&self, metrics: &ValuationMetrics) -> Verdict {
        let cfg = &self.config;
        let fcf_yield = metrics.multiples.fcf_yield;
        let roic = metrics.returns.roic;

        let mut notes = Vec::new();
        if let Some(fy) = fcf_yield {
            notes.push(format!("FCF Yield: {}", pct(fy)));
        }
        if let Some(roic) = roic {
            notes.push(format!("ROIC: {}", pct(roic)));
        }

        let great_business = holds(roic, |x| x >= cfg.min_roic);
        let verdict = if great_business && holds(fcf_yield, |x| x >= cfg.min_fcf_yield) {
            "Quality at Reasonable Price"
        } else if great_business {
            "Great Business, Price TBD"
        } else {
            "Pass / Wait"
        };

        Verdict::new(self.kind().name(), verdict)
            .with_metric("FCF Yield", fcf_yield)
            .with_metric("ROIC", roic)
            .with_heuristics(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use valuelens_metrics::{Multiples, ReturnsOnCapital};

    fn metrics(fcf_yield: Option<f64>, roic: Option<f64>) -> ValuationMetrics {
        ValuationMetrics {
            multiples: Multiples {
                fcf_yield,
                ..Default::default()
            },
            returns: ReturnsOnCapital {
                roic,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[rstest]
    #[case(Some(0.05), Some(0.15), "Quality at Reasonable Price")]
    #[case(Some(0.03), Some(0.40), "Great Business, Price TBD")]
    #[case(None, Some(0.40), "Great Business, Price TBD")]
    #[case(Some(0.12), Some(0.14), "Pass / Wait")]
    #[case(None, None, "Pass / Wait")]
    fn test_verdict(#[case] fcf_yield: Option<f64>, #[case] roic: Option<f64>, #[case] expected: &str) {
        let v = BuffettLens::default().evaluate(&metrics(fcf_yield, roic));
        assert_eq!(v.verdict, expected);
    }

    #[test]
    fn test_notes() {
        let v = BuffettLens::default().evaluate(&metrics(Some(0.0326), None));
        assert_eq!(v.heuristics, vec!["FCF Yield: 3.3%"]);
    }
}
