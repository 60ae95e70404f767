//! Integration tests for report rendering and export.

use valuelens_data::Ticker;
use valuelens_data::fixtures::sample_financials;
use valuelens_lenses::{LensKind, ProfileKind};
use valuelens_metrics::{MetricSection, ValuationMetrics};
use valuelens_output::{
    ExportFormat, Exporter, ReportBuilder, StatementExport, ValuationReport, pdf_file_name,
    render_pdf,
};

fn report_for(lens: LensKind) -> ValuationReport {
    let fin = sample_financials(Ticker::parse("AAPL").unwrap());
    let metrics = ValuationMetrics::compute(&fin);
    ReportBuilder::new()
        .ticker(fin.ticker.as_str())
        .lens(lens)
        .metrics(metrics)
        .profile(ProfileKind::for_lens(lens).map(|p| p.assess(&metrics.profile)))
        .build()
        .unwrap()
}

#[test]
fn test_full_report_workflow() {
    for lens in LensKind::ALL {
        let report = report_for(lens);
        assert_eq!(report.lens, lens);
        assert_eq!(report.sections.len(), MetricSection::ALL.len());

        let ascii = report.to_ascii_table();
        assert!(ascii.contains(report.verdict.verdict));

        let markdown = report.to_markdown();
        assert!(markdown.contains("## Valuation Multiples / Yields"));

        let json = report.export_to_string(ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["verdict"]["Verdict"], report.verdict.verdict);

        let pdf = render_pdf(&report).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}

#[test]
fn test_sample_verdicts() {
    assert_eq!(report_for(LensKind::Burry).verdict.verdict, "Weak");
    assert_eq!(report_for(LensKind::Greenblatt).verdict.verdict, "Weak");
    assert_eq!(
        report_for(LensKind::Buffett).verdict.verdict,
        "Great Business, Price TBD"
    );
    assert_eq!(
        report_for(LensKind::Klarman).verdict.verdict,
        "Not an Asset Bargain"
    );
    assert_eq!(
        report_for(LensKind::Einhorn).verdict.verdict,
        "Needs Peer Context"
    );
}

#[test]
fn test_profile_only_for_mapped_lenses() {
    assert!(report_for(LensKind::Buffett).profile.is_some());
    assert!(report_for(LensKind::Einhorn).profile.is_none());
}

#[test]
fn test_statement_exports() {
    let fin = sample_financials(Ticker::parse("AAPL").unwrap());
    for table in [&fin.income, &fin.balance_sheet, &fin.cash_flow] {
        let export = StatementExport::from_table("AAPL", table);
        let csv = export.export_to_string(ExportFormat::Csv).unwrap();
        assert_eq!(csv.lines().count(), export.rows.len() + 1);
        assert!(export.to_ascii_table(4).contains("(quarterly): AAPL"));
    }
}

#[test]
fn test_pdf_name() {
    assert_eq!(
        pdf_file_name("MSFT", LensKind::Klarman),
        "MSFT_klarman_valuation.pdf"
    );
}
