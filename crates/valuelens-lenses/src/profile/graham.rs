//! Graham: low multiples and a conservative balance sheet.

use super::{RuleCheck, RuleStatus, grade};
use valuelens_metrics::ProfileMetrics;

pub(crate) fn rules(m: &ProfileMetrics) -> Vec<RuleCheck> {
    use RuleStatus::{Fail, Pass, Warn};

    let product = m.pe.zip(m.pb).map(|(pe, pb)| pe * pb);

    vec![
        grade("P/E multiple", "P/E ≤ 15", m.pe, false, "P/E not available from Yahoo Finance.", |pe| {
            if pe <= 15.0 {
                (Pass, "Classic Graham low multiple.")
            } else {
                (Fail, "Above the classic Graham threshold.")
            }
        }),
        grade("Price to book", "P/B ≤ 1.5", m.pb, false, "Book value data missing.", |pb| {
            if pb <= 1.5 {
                (Pass, "Discount or near-discount to book.")
            } else {
                (Fail, "Above classic Graham P/B.")
            }
        }),
        grade(
            "Graham product",
            "P/E × P/B ≤ 22.5",
            product,
            false,
            "Need both P/E and P/B to check this.",
            |x| {
                if x <= 22.5 {
                    (Pass, "Within Graham's classic combined limit.")
                } else {
                    (Fail, "Above Graham's combined P/E×P/B limit.")
                }
            },
        ),
        grade("Leverage", "Debt/Equity ≤ 0.5", m.debt_to_equity, false, "Leverage data missing.", |de| {
            if de <= 0.5 {
                (Pass, "Very conservative leverage.")
            } else if de <= 1.0 {
                (Warn, "Moderate leverage.")
            } else {
                (Fail, "High leverage for Graham style.")
            }
        }),
        grade("Liquidity", "Current ratio ≥ 2.0", m.current_ratio, false, "Liquidity data missing.", |cr| {
            if cr >= 2.0 {
                (Pass, "Strong near-term liquidity.")
            } else if cr >= 1.5 {
                (Warn, "Acceptable but not ideal.")
            } else {
                (Fail, "Weak current ratio for Graham.")
            }
        }),
    ]
}
