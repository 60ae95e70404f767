//! Greenblatt Lens
//!
//! Magic Formula: earnings yield (EBIT/EV) and return on capital
//! (EBIT / (NWC + Net PPE)).

use super::{Lens, holds, pct};
use crate::kind::LensKind;
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};
use valuelens_metrics::ValuationMetrics;

/// Configuration for the Greenblatt lens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreenblattConfig {
    /// Earnings yield above this, with strong ROC, is attractive (default: 0.08)
    pub attractive_yield: f64,
    /// ROC above this, with a high yield, is attractive (default: 0.20)
    pub attractive_roc: f64,
    /// Earnings yield floor for a mixed signal (default: 0.05)
    pub mixed_yield: f64,
    /// ROC floor for a mixed signal (default: 0.10)
    pub mixed_roc: f64,
}

impl Default for GreenblattConfig {
    fn default() -> Self {
        Self {
            attractive_yield: 0.08,
            attractive_roc: 0.20,
            mixed_yield: 0.05,
            mixed_roc: 0.10,
        }
    }
}

/// Greenblatt (Magic Formula) lens
#[derive(Debug, Default)]
pub struct GreenblattLens {
    config: GreenblattConfig,
}

impl Lens for GreenblattLens {
    type Config = GreenblattConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn kind(&self) -> LensKind {
        LensKind::Greenblatt
    }

    fn evaluate(&self, metrics: &ValuationMetrics) -> Verdict {
        let cfg = &self.config;
        let ey = metrics.multiples.earnings_yield;
        let roc = metrics.returns.roc_greenblatt;

        let mut notes = Vec::new();
        if let Some(ey) = ey {
            notes.push(format!("Earnings Yield: {}", pct(ey)));
        }
        if let Some(roc) = roc {
            notes.push(format!("ROC: {} (target > {:.0}%)", pct(roc), cfg.attractive_roc * 100.0));
        }

        let verdict = if holds(ey, |x| x > cfg.attractive_yield)
            && holds(roc, |x| x > cfg.attractive_roc)
        {
            "Potentially Attractive"
        } else if holds(ey, |x| x > cfg.mixed_yield) && holds(roc, |x| x > cfg.mixed_roc) {
            "Mixed/OK"
        } else {
            "Weak"
        };

        Verdict::new(self.kind().name(), verdict)
            .with_metric("Earnings Yield (EBIT/EV)", ey)
            .with_metric("ROC", roc)
            .with_heuristics(notes)
    }
}
