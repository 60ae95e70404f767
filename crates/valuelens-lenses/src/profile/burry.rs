//! Burry: cheap on free cash flow with an acceptable balance sheet.

use super::{RuleCheck, RuleStatus, grade};
use valuelens_metrics::ProfileMetrics;

pub(crate) fn rules(m: &ProfileMetrics) -> Vec<RuleCheck> {
    use RuleStatus::{Fail, Na, Pass, Warn};

    let fcf_yield = grade(
        "FCF yield",
        "FCF yield ≥ 8–10%",
        m.fcf_yield,
        true,
        "Free cash flow data missing.",
        |fy| {
            if fy >= 0.10 {
                (Pass, "Very cheap on cash flows.")
            } else if fy >= 0.06 {
                (Warn, "Cheap-ish on cash flows.")
            } else {
                (Fail, "Not cheap on cash flows.")
            }
        },
    );

    // P/E stands in when EV/EBITDA is unavailable
    let valuation = match (m.ev_ebitda, m.pe) {
        (Some(_), _) => grade("EV/EBITDA", "EV/EBITDA ≤ 10", m.ev_ebitda, false, "", |x| {
            if x <= 8.0 {
                (Pass, "EV/EBITDA consistent with deep value.")
            } else if x <= 10.0 {
                (Warn, "Okay but not extreme value.")
            } else {
                (Fail, "Rich on EV/EBITDA for Burry.")
            }
        }),
        (None, Some(_)) => grade("P/E", "P/E ≤ 12", m.pe, false, "", |pe| {
            if pe <= 10.0 {
                (Pass, "Low P/E as backup value signal.")
            } else if pe <= 14.0 {
                (Warn, "Moderate P/E.")
            } else {
                (Fail, "High P/E for deep value.")
            }
        }),
        (None, None) => RuleCheck {
            name: "Valuation multiples",
            condition: "EV/EBITDA ≤ 10 or P/E ≤ 12",
            value: None,
            percent: false,
            status: Na,
            comment: "Valuation multiples missing.",
        },
    };

    let leverage = grade(
        "Leverage",
        "Debt/Equity ≤ 1.0",
        m.debt_to_equity,
        false,
        "Leverage data missing.",
        |de| {
            if de <= 0.5 {
                (Pass, "Very conservative balance sheet.")
            } else if de <= 1.0 {
                (Warn, "Manageable leverage.")
            } else {
                (Fail, "High leverage for a deep value idea.")
            }
        },
    );

    vec![fcf_yield, valuation, leverage]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ev_ebitda_preferred() {
        let m = ProfileMetrics {
            ev_ebitda: Some(7.0),
            pe: Some(40.0),
            ..Default::default()
        };
        let rule = &rules(&m)[1];
        assert_eq!(rule.name, "EV/EBITDA");
        assert_eq!(rule.status, RuleStatus::Pass);
    }

    #[test]
    fn test_pe_fallback() {
        let m = ProfileMetrics {
            pe: Some(12.0),
            ..Default::default()
        };
        let rule = &rules(&m)[1];
        assert_eq!(rule.name, "P/E");
        assert_eq!(rule.status, RuleStatus::Warn);
        assert_eq!(rule.comment, "Moderate P/E.");
    }

    #[test]
    fn test_no_multiples() {
        let rule = &rules(&ProfileMetrics::default())[1];
        assert_eq!(rule.name, "Valuation multiples");
        assert_eq!(rule.status, RuleStatus::Na);
        assert_eq!(rule.display_value(), "—");
    }

    #[test]
    fn test_fcf_yield_grades() {
        let m = ProfileMetrics {
            fcf_yield: Some(0.07),
            debt_to_equity: Some(0.4),
            ..Default::default()
        };
        let rules = rules(&m);
        assert_eq!(rules[0].status, RuleStatus::Warn);
        assert_eq!(rules[2].status, RuleStatus::Pass);
    }
}
