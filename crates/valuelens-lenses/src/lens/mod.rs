//! Superinvestor lenses.
//!
//! A lens reads a few metrics from [`ValuationMetrics`] and produces a
//! [`Verdict`]. Thresholds live in a per-lens config with the published
//! screen values as defaults.

pub mod buffett;
pub mod burry;
pub mod einhorn;
pub mod greenblatt;
pub mod klarman;

pub use buffett::{BuffettConfig, BuffettLens};
pub use burry::{BurryConfig, BurryLens};
pub use einhorn::{EinhornConfig, EinhornLens};
pub use greenblatt::{GreenblattConfig, GreenblattLens};
pub use klarman::{KlarmanConfig, KlarmanLens};

use crate::kind::LensKind;
use crate::verdict::Verdict;
use valuelens_metrics::ValuationMetrics;

/// A rule-based view over computed metrics.
pub trait Lens {
    /// Threshold configuration
    type Config: Default;

    /// Create the lens with a custom configuration.
    fn with_config(config: Self::Config) -> Self
    where
        Self: Sized;

    /// Current configuration.
    fn config(&self) -> &Self::Config;

    /// Which lens this is.
    fn kind(&self) -> LensKind;

    /// Evaluate the lens rules.
    fn evaluate(&self, metrics: &ValuationMetrics) -> Verdict;
}

impl LensKind {
    /// Evaluate this lens with default thresholds.
    pub fn evaluate(&self, metrics: &ValuationMetrics) -> Verdict {
        match self {
            Self::Burry => BurryLens::default().evaluate(metrics),
            Self::Greenblatt => GreenblattLens::default().evaluate(metrics),
            Self::Buffett => BuffettLens::default().evaluate(metrics),
            Self::Klarman => KlarmanLens::default().evaluate(metrics),
            Self::Einhorn => EinhornLens::default().evaluate(metrics),
        }
    }
}

/// Format a fraction as a one-decimal percentage for notes.
pub(crate) fn pct(x: f64) -> String {
    format!("{:.1}%", x * 100.0)
}

/// True when the value is defined and satisfies `pred`.
pub(crate) fn holds(value: Option<f64>, pred: impl Fn(f64) -> bool) -> bool {
    value.is_some_and(pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuelens_data::Ticker;
    use valuelens_data::fixtures::sample_financials;

    #[test]
    fn test_every_lens_names_itself() {
        let fin = sample_financials(Ticker::parse("AAPL").unwrap());
        let metrics = ValuationMetrics::compute(&fin);
        for kind in LensKind::ALL {
            let verdict = kind.evaluate(&metrics);
            assert_eq!(verdict.lens, kind.name());
            assert!(!verdict.key_metrics.is_empty());
            assert!(!verdict.verdict.is_empty());
        }
    }

    #[test]
    fn test_empty_metrics_never_fail() {
        let metrics = ValuationMetrics::default();
        for kind in LensKind::ALL {
            let verdict = kind.evaluate(&metrics);
            assert!(verdict.heuristics.is_empty(), "{kind}");
            assert!(verdict.key_metrics.iter().all(|m| m.value.is_none()));
        }
    }

    #[test]
    fn test_pct() {
        assert_eq!(pct(0.0842), "8.4%");
        assert_eq!(pct(-0.2), "-20.0%");
    }
}
