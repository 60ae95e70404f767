//! Klarman Lens
//!
//! Asset-based margin of safety: price to book and a rough net current asset
//! value (NWC + cash − debt) against market cap.

use super::{Lens, holds};
use crate::kind::LensKind;
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};
use valuelens_metrics::ValuationMetrics;

/// Configuration for the Klarman lens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KlarmanConfig {
    /// P/B strictly below this is value territory (default: 1.2)
    pub max_price_to_book: f64,
}

impl Default for KlarmanConfig {
    fn default() -> Self {
        Self {
            max_price_to_book: 1.2,
        }
    }
}

/// Klarman (Asset / Margin of Safety) lens
#[derive(Debug, Default)]
pub struct KlarmanLens {
    config: KlarmanConfig,
}

impl Lens for KlarmanLens {
    type Config = KlarmanConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn kind(&self) -> LensKind {
        LensKind::Klarman
    }

    fn evaluate(&self, metrics: &ValuationMetrics) -> Verdict {
        let max_pb = self.config.max_price_to_book;
        let pb = metrics.core.price_to_book();
        let ncav = metrics.core.ncav_estimate();
        let bargain = holds(pb, |x| x < max_pb);

        let mut notes = Vec::new();
        if pb.is_some() {
            notes.push(if bargain {
                format!("P/B < {max_pb} → value territory.")
            } else {
                format!("P/B ≥ {max_pb} → not a classic asset bargain.")
            });
        }
        if let (Some(ncav), Some(mc)) = (ncav, metrics.core.market_cap)
            && ncav > mc
        {
            notes.push("NCAV > Market Cap → net-net territory (rare in large caps).".to_string());
        }

        let verdict = if bargain {
            "Asset Play Possible"
        } else {
            "Not an Asset Bargain"
        };

        Verdict::new(self.kind().name(), verdict)
            .with_metric("P/B (approx)", pb)
            .with_metric("NCAV est.", ncav)
            .with_heuristics(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use valuelens_metrics::CoreFinancials;

    fn metrics(market_cap: f64, equity: f64, nwc: f64, cash: f64, debt: f64) -> ValuationMetrics {
        ValuationMetrics {
            core: CoreFinancials {
                market_cap: Some(market_cap),
                equity_mrq: Some(equity),
                nwc_mrq: Some(nwc),
                cash_mrq: Some(cash),
                debt_mrq: Some(debt),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_asset_play() {
        let v = KlarmanLens::default().evaluate(&metrics(100.0, 100.0, 80.0, 40.0, 10.0));
        assert_eq!(v.verdict, "Asset Play Possible");
        assert_relative_eq!(v.key_metric("P/B (approx)").unwrap(), 1.0);
        assert_relative_eq!(v.key_metric("NCAV est.").unwrap(), 110.0);
        assert_eq!(
            v.heuristics,
            vec![
                "P/B < 1.2 → value territory.",
                "NCAV > Market Cap → net-net territory (rare in large caps).",
            ]
        );
    }

    #[test]
    fn test_not_a_bargain_at_threshold() {
        let v = KlarmanLens::default().evaluate(&metrics(120.0, 100.0, 10.0, 5.0, 50.0));
        assert_eq!(v.verdict, "Not an Asset Bargain");
        assert_eq!(v.heuristics, vec!["P/B ≥ 1.2 → not a classic asset bargain."]);
    }

    #[test]
    fn test_zero_equity_leaves_pb_undefined() {
        let v = KlarmanLens::default().evaluate(&metrics(120.0, 0.0, 10.0, 5.0, 50.0));
        assert_eq!(v.key_metric("P/B (approx)"), None);
        assert_eq!(v.verdict, "Not an Asset Bargain");
        assert!(v.heuristics.is_empty());
    }
}
