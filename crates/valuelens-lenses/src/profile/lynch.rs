//! Lynch: growth at a reasonable price.

use super::{RuleCheck, RuleStatus, grade};
use valuelens_metrics::ProfileMetrics;

pub(crate) fn rules(m: &ProfileMetrics) -> Vec<RuleCheck> {
    use RuleStatus::{Fail, Pass, Warn};

    let growth = m.earnings_growth.or(m.revenue_growth);

    vec![
        grade("Growth rate", "Growth ≥ 10%", growth, true, "Growth data missing.", |g| {
            if g >= 0.20 {
                (Pass, "Very strong growth.")
            } else if g >= 0.10 {
                (Pass, "Solid, Lynch-style grower.")
            } else if g >= 0.05 {
                (Warn, "Mild growth.")
            } else {
                (Fail, "Low growth for Lynch-style idea.")
            }
        }),
        grade("PEG ratio", "PEG ≈ 1.0", m.peg, false, "PEG can't be computed reliably.", |peg| {
            if peg <= 1.0 {
                (Pass, "Classic Lynch PEG ≤ 1.")
            } else if peg <= 1.5 {
                (Warn, "PEG a bit high but maybe okay.")
            } else {
                (Fail, "PEG too high for GARP.")
            }
        }),
        grade("P/E guardrail", "P/E not extreme (≤ 30)", m.pe, false, "P/E missing.", |pe| {
            if pe <= 20.0 {
                (Pass, "Reasonable earnings multiple.")
            } else if pe <= 30.0 {
                (Warn, "Upper end of reasonable.")
            } else {
                (Fail, "Too expensive for Lynch-style GARP.")
            }
        }),
        grade("Leverage", "Debt/Equity ≤ 1.0", m.debt_to_equity, false, "Leverage data missing.", |de| {
            if de <= 0.5 {
                (Pass, "Comfortable leverage for a grower.")
            } else if de <= 1.0 {
                (Warn, "Moderate leverage.")
            } else {
                (Fail, "High leverage for Lynch-style stock.")
            }
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_growth_prefers_earnings() {
        let m = ProfileMetrics {
            earnings_growth: Some(0.25),
            revenue_growth: Some(0.02),
            ..Default::default()
        };
        let rule = &rules(&m)[0];
        assert_relative_eq!(rule.value.unwrap(), 0.25);
        assert_eq!(rule.comment, "Very strong growth.");
    }

    #[test]
    fn test_growth_falls_back_to_revenue() {
        let m = ProfileMetrics {
            revenue_growth: Some(0.07),
            ..Default::default()
        };
        let rule = &rules(&m)[0];
        assert_eq!(rule.status, RuleStatus::Warn);
        assert_eq!(rule.display_value(), "7.0%");
    }

    #[test]
    fn test_peg_grades() {
        let grade_peg = |peg| {
            rules(&ProfileMetrics {
                peg: Some(peg),
                ..Default::default()
            })[1]
                .status
        };
        assert_eq!(grade_peg(0.8), RuleStatus::Pass);
        assert_eq!(grade_peg(1.5), RuleStatus::Warn);
        assert_eq!(grade_peg(2.4), RuleStatus::Fail);
    }
}
