//! Lenses and profiles over the bundled sample financials.

use valuelens_data::Ticker;
use valuelens_data::fixtures::sample_financials;
use valuelens_lenses::{LensKind, ProfileKind, RuleStatus};
use valuelens_metrics::ValuationMetrics;

fn sample_metrics() -> ValuationMetrics {
    ValuationMetrics::compute(&sample_financials(Ticker::parse("AAPL").unwrap()))
}

#[test]
fn test_large_cap_is_not_cheap_by_burry() {
    let verdict = LensKind::Burry.evaluate(&sample_metrics());

    // EV/EBITDA ~24, EV/EBIT ~27, FCF yield ~3.3%
    assert_eq!(verdict.verdict, "Weak");
    assert_eq!(verdict.heuristics.len(), 3);
    assert!(verdict.key_metric("EV/EBITDA").unwrap() > 20.0);
}

#[test]
fn test_greenblatt_sees_high_roc_but_low_yield() {
    let verdict = LensKind::Greenblatt.evaluate(&sample_metrics());
    assert_eq!(verdict.verdict, "Weak");
    assert!(verdict.key_metric("ROC").unwrap() > 0.20);
    assert!(verdict.key_metric("Earnings Yield (EBIT/EV)").unwrap() < 0.05);
}

#[test]
fn test_buffett_sees_great_business() {
    let verdict = LensKind::Buffett.evaluate(&sample_metrics());
    assert_eq!(verdict.verdict, "Great Business, Price TBD");
}

#[test]
fn test_verdict_json_block() {
    let verdict = LensKind::Klarman.evaluate(&sample_metrics());
    let json = serde_json::to_value(&verdict).unwrap();

    assert_eq!(json["Lens"], "Klarman (Asset / Margin of Safety)");
    assert_eq!(json["Verdict"], "Not an Asset Bargain");
    assert!(json["Key Metrics"]["P/B (approx)"].is_number());
    assert!(json["Heuristics"].is_array());
}

#[test]
fn test_every_profile_grades_every_rule() {
    let metrics = sample_metrics();
    for kind in ProfileKind::ALL {
        let assessment = kind.assess(&metrics.profile);
        assert!(!assessment.rules.is_empty());
        assert!(
            assessment.rules.iter().all(|r| r.status != RuleStatus::Na),
            "{kind} has an ungraded rule"
        );
        let s = &assessment.summary;
        assert_eq!(s.passes + s.warns + s.fails, assessment.rules.len());
        assert!(s.headline.contains(kind.short_name()));
    }
}
