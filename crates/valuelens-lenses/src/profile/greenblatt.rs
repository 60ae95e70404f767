//! Greenblatt: high earnings yield and high return on capital.

use super::{RuleCheck, RuleStatus, grade};
use valuelens_metrics::ProfileMetrics;

pub(crate) fn rules(m: &ProfileMetrics) -> Vec<RuleCheck> {
    use RuleStatus::{Fail, Pass, Warn};

    vec![
        grade(
            "Earnings yield",
            "Earnings yield ≥ 8%",
            m.earnings_yield,
            true,
            "Earnings yield can't be computed.",
            |ey| {
                if ey >= 0.15 {
                    (Pass, "Very cheap on earnings.")
                } else if ey >= 0.08 {
                    (Pass, "Cheap-ish on earnings.")
                } else {
                    (Fail, "Not cheap for Magic Formula.")
                }
            },
        ),
        // ROE stands in for return on capital here
        grade(
            "Return on capital (ROE proxy)",
            "ROE ≥ 15%",
            m.roe,
            true,
            "ROE not available.",
            |roe| {
                if roe >= 0.20 {
                    (Pass, "Excellent return on capital.")
                } else if roe >= 0.15 {
                    (Pass, "Good return on capital.")
                } else {
                    (Fail, "Weak ROC for Magic Formula.")
                }
            },
        ),
        grade("EV/EBITDA", "EV/EBITDA ≤ 10", m.ev_ebitda, false, "EV/EBITDA missing.", |x| {
            if x <= 8.0 {
                (Pass, "Multiple consistent with Magic Formula cheapness.")
            } else if x <= 10.0 {
                (Warn, "Okay, not screaming cheap.")
            } else {
                (Fail, "Too expensive on EV/EBITDA.")
            }
        }),
    ]
}
