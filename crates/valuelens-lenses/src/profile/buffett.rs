//! Buffett: high-return businesses with conservative leverage at a sensible price.

use super::{RuleCheck, RuleStatus, grade};
use valuelens_metrics::ProfileMetrics;

pub(crate) fn rules(m: &ProfileMetrics) -> Vec<RuleCheck> {
    use RuleStatus::{Fail, Pass, Warn};

    vec![
        grade("Return on equity", "ROE ≥ 15%", m.roe, true, "ROE not available.", |roe| {
            if roe >= 0.20 {
                (Pass, "Excellent long-term profitability.")
            } else if roe >= 0.15 {
                (Pass, "Good profitability.")
            } else if roe >= 0.10 {
                (Warn, "Okay, but not standout.")
            } else {
                (Fail, "Low ROE for a Buffett compounder.")
            }
        }),
        grade("Gross margin", "Gross margin ≥ 40%", m.gross_margin, true, "Margin data missing.", |gm| {
            if gm >= 0.40 {
                (Pass, "Indicates pricing power and moat.")
            } else {
                (Warn, "Not obviously a high-moat margin.")
            }
        }),
        grade(
            "Operating margin",
            "Operating margin ≥ 20%",
            m.operating_margin,
            true,
            "Operating margin missing.",
            |om| {
                if om >= 0.20 {
                    (Pass, "Strong operating profitability.")
                } else if om >= 0.12 {
                    (Warn, "Decent but not elite.")
                } else {
                    (Fail, "Thin operating margin.")
                }
            },
        ),
        grade(
            "Cash conversion",
            "FCF / Net income ≈ 80–120%",
            m.fcf_conversion,
            true,
            "Cash-flow detail missing.",
            |fc| {
                if (0.8..=1.2).contains(&fc) {
                    (Pass, "Earnings are backed by cash.")
                } else if (0.6..=1.4).contains(&fc) {
                    (Warn, "Okay but a bit noisy.")
                } else {
                    (Fail, "Earnings not reliably backed by cash.")
                }
            },
        ),
        grade("Leverage", "Debt/Equity ≤ 0.5", m.debt_to_equity, false, "Leverage data missing.", |de| {
            if de <= 0.5 {
                (Pass, "Very conservative balance sheet.")
            } else if de <= 1.0 {
                (Warn, "Moderate leverage.")
            } else {
                (Fail, "Heavy leverage for Buffett style.")
            }
        }),
        grade("Valuation", "P/E ≤ 20", m.pe, false, "P/E not available.", |pe| {
            if pe <= 20.0 {
                (Pass, "Reasonable price for quality.")
            } else if pe <= 30.0 {
                (Warn, "Somewhat rich valuation.")
            } else {
                (Fail, "Very expensive relative to earnings.")
            }
        }),
    ]
}
