//! Einhorn Lens
//!
//! Relative value via EV multiples. Peer comparison is left to the reader.

use super::{Lens, holds};
use crate::kind::LensKind;
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};
use valuelens_metrics::ValuationMetrics;

/// Configuration for the Einhorn lens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EinhornConfig {
    /// EV/EBITDA strictly below this is potentially cheap (default: 8.0)
    pub max_ev_ebitda: f64,
}

impl Default for EinhornConfig {
    fn default() -> Self {
        Self { max_ev_ebitda: 8.0 }
    }
}

/// Einhorn (Relative Value) lens
#[derive(Debug, Default)]
pub struct EinhornLens {
    config: EinhornConfig,
}

impl Lens for EinhornLens {
    type Config = EinhornConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn kind(&self) -> LensKind {
        LensKind::Einhorn
    }

    fn evaluate(&self, metrics: &ValuationMetrics) -> Verdict {
        let max = self.config.max_ev_ebitda;
        let ev_ebitda = metrics.multiples.ev_ebitda;
        let ev_sales = metrics.multiples.ev_sales;

        let mut notes = Vec::new();
        if let Some(x) = ev_ebitda {
            notes.push(format!("EV/EBITDA: {x:.2} (screen < {max}× often interesting)."));
        }
        if let Some(x) = ev_sales {
            notes.push(format!("EV/Sales: {x:.2} (useful for low-margin sectors)."));
        }

        let verdict = if holds(ev_ebitda, |x| x < max) {
            "Potentially Cheap (EV/EBITDA)"
        } else {
            "Needs Peer Context"
        };

        Verdict::new(self.kind().name(), verdict)
            .with_metric("EV/EBITDA", ev_ebitda)
            .with_metric("EV/Sales", ev_sales)
            .with_heuristics(notes)
    }
}
