//! Burry Lens
//!
//! Cheapness via EV/EBITDA and EV/EBIT, with FCF yield as a sanity check.
//! Two or more passing screens make a strong signal.

use super::{Lens, holds};
use crate::kind::LensKind;
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};
use valuelens_metrics::ValuationMetrics;

/// Configuration for the Burry lens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurryConfig {
    /// EV/EBITDA strictly below this is cheap (default: 8.0)
    pub max_ev_ebitda: f64,
    /// EV/EBIT strictly below this is supportive (default: 10.0)
    pub max_ev_ebit: f64,
    /// FCF yield strictly above this is attractive (default: 0.08)
    pub min_fcf_yield: f64,
}

impl Default for BurryConfig {
    fn default() -> Self {
        Self {
            max_ev_ebitda: 8.0,
            max_ev_ebit: 10.0,
            min_fcf_yield: 0.08,
        }
    }
}

/// Burry (EV/EBITDA) lens
#[derive(Debug, Default)]
pub struct BurryLens {
    config: BurryConfig,
}

impl Lens for BurryLens {
    type Config = BurryConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn kind(&self) -> LensKind {
        LensKind::Burry
    }

    fn evaluate(&self, metrics: &ValuationMetrics) -> Verdict {
        let cfg = &self.config;
        let ev_ebitda = metrics.multiples.ev_ebitda;
        let ev_ebit = metrics.multiples.ev_ebit;
        let fcf_yield = metrics.multiples.fcf_yield;

        let cheap = holds(ev_ebitda, |x| x < cfg.max_ev_ebitda);
        let supportive = holds(ev_ebit, |x| x < cfg.max_ev_ebit);
        let attractive = holds(fcf_yield, |x| x > cfg.min_fcf_yield);

        let mut notes = Vec::new();
        if ev_ebitda.is_some() {
            notes.push(if cheap {
                format!("EV/EBITDA < {} → potentially cheap (Burry screen).", cfg.max_ev_ebitda)
            } else {
                format!("EV/EBITDA ≥ {} → not obviously cheap by Burry screen.", cfg.max_ev_ebitda)
            });
        }
        if ev_ebit.is_some() {
            notes.push(if supportive {
                format!("EV/EBIT < {} → supportive.", cfg.max_ev_ebit)
            } else {
                format!("EV/EBIT ≥ {} → caution.", cfg.max_ev_ebit)
            });
        }
        if let Some(fy) = fcf_yield {
            notes.push(if attractive {
                format!("FCF Yield > {:.0}% → attractive cash yield.", cfg.min_fcf_yield * 100.0)
            } else if fy > 0.0 {
                format!("Positive FCF yield, but < {:.0}%.", cfg.min_fcf_yield * 100.0)
            } else {
                "Negative/zero FCF yield.".to_string()
            });
        }

        let passes = [cheap, supportive, attractive].iter().filter(|p| **p).count();
        let verdict = match passes {
            2.. => "Strong",
            1 => "Mixed",
            _ => "Weak",
        };

        Verdict::new(self.kind().name(), verdict)
            .with_metric("EV/EBITDA", ev_ebitda)
            .with_metric("EV/EBIT", ev_ebit)
            .with_metric("FCF Yield", fcf_yield)
            .with_heuristics(notes)
    }
}
