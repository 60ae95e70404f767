//! Valuation reports.
//!
//! A [`ValuationReport`] holds everything shown for one analysis: the three
//! metric tables, the lens verdict and an optional profile checklist. It
//! renders to ASCII, Markdown and JSON; see [`crate::pdf`] for PDF.

use crate::format::format_metric;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use valuelens_lenses::{LensKind, ProfileAssessment, Verdict};
use valuelens_metrics::{MetricFormat, MetricSection, ValuationMetrics};

/// Disclaimer shown under every report.
pub const CAPTION: &str = "Data via Yahoo Finance. TTM values are approximated by summing last four \
quarters. Invested Capital ≈ Debt + Equity − Cash; Magic Formula capital = NWC + Net PPE. Tax rate \
is clamped 0–35% using Income Tax / |Pretax Income|. Educational; not investment advice.";

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Builder was missing a required field.
    #[error("Missing report field: {0}")]
    MissingField(&'static str),
}

/// One metric row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Registry key
    pub key: &'static str,
    /// Row label
    pub label: &'static str,
    /// Raw value
    pub value: Option<f64>,
    /// Display format
    pub format: MetricFormat,
    /// Formatted value, empty when undefined
    pub display: String,
}

/// One titled metric table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    /// Section
    pub section: MetricSection,
    /// Table title
    pub title: String,
    /// Rows in display order
    pub rows: Vec<ReportRow>,
}

impl ReportSection {
    /// Build a section from computed metrics.
    pub fn from_metrics(metrics: &ValuationMetrics, section: MetricSection, title: String) -> Self {
        let rows = metrics
            .section(section)
            .into_iter()
            .map(|(info, value)| ReportRow {
                key: info.key,
                label: info.label,
                value,
                format: info.format,
                display: format_metric(value, info.format),
            })
            .collect();
        Self {
            section,
            title,
            rows,
        }
    }

    /// Look up a row by metric key.
    pub fn row(&self, key: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.key == key)
    }
}

/// A full valuation report for one ticker and lens.
#[derive(Debug, Clone, Serialize)]
pub struct ValuationReport {
    /// Ticker symbol.
    pub ticker: String,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// Lens applied.
    pub lens: LensKind,

    /// Core metrics, multiples/yields and returns tables.
    pub sections: Vec<ReportSection>,

    /// Lens verdict.
    pub verdict: Verdict,

    /// Investor-profile checklist, when one was run.
    pub profile: Option<ProfileAssessment>,
}

impl ValuationReport {
    /// Table for a section.
    pub fn section(&self, section: MetricSection) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// Row by metric key across all tables.
    pub fn row(&self, key: &str) -> Option<&ReportRow> {
        self.sections.iter().find_map(|s| s.row(key))
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The verdict as a pretty-printed JSON block.
    pub fn verdict_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(&self.verdict)?)
    }

    /// Render as an ASCII table.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nSuperinvestor Valuation: {}\n", self.ticker));
        output.push_str(&format!("Lens: {}\n", self.lens.name()));
        output.push_str(&format!(
            "Generated: {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        for section in &self.sections {
            output.push_str(&format!("{}\n", section.title));
            output.push_str(&"-".repeat(80));
            output.push('\n');
            for row in &section.rows {
                output.push_str(&format!("{:<44} {:>16}\n", row.label, row.display));
            }
            output.push('\n');
        }

        output.push_str(&format!("Lens Verdict: {}\n", self.verdict.verdict));
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for note in &self.verdict.heuristics {
            output.push_str(&format!("  - {note}\n"));
        }

        if let Some(profile) = &self.profile {
            output.push('\n');
            output.push_str(&format!("Profile: {}\n", profile.profile.label()));
            output.push_str(&"-".repeat(80));
            output.push('\n');
            output.push_str(&format!(
                "{:<30} {:<28} {:>10} {:>6}\n",
                "Rule", "Condition", "Value", "Status"
            ));
            for rule in &profile.rules {
                output.push_str(&format!(
                    "{:<30} {:<28} {:>10} {:>6}\n",
                    rule.name,
                    rule.condition,
                    rule.display_value(),
                    rule.status
                ));
            }
            output.push_str(&format!(
                "{} ({} pass, {} warn, {} fail)\n",
                profile.summary.headline,
                profile.summary.passes,
                profile.summary.warns,
                profile.summary.fails
            ));
        }

        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(CAPTION);
        output.push('\n');

        output
    }

    /// Render as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Superinvestor Valuation: {}\n\n", self.ticker));
        output.push_str(&format!("**Lens:** {}\n\n", self.lens.name()));

        for section in &self.sections {
            output.push_str(&format!("## {}\n\n", section.title));
            output.push_str("| Metric | Value |\n");
            output.push_str("|--------|------:|\n");
            for row in &section.rows {
                output.push_str(&format!("| {} | {} |\n", row.label, row.display));
            }
            output.push('\n');
        }

        output.push_str("## Lens Verdict\n\n");
        output.push_str(&format!("**Conclusion:** {}\n\n", self.verdict.verdict));
        for note in &self.verdict.heuristics {
            output.push_str(&format!("- {note}\n"));
        }
        output.push('\n');

        if let Some(profile) = &self.profile {
            output.push_str(&format!("## {}\n\n", profile.profile.label()));
            output.push_str("| Rule | Condition | Value | Status | Comment |\n");
            output.push_str("|------|-----------|------:|--------|---------|\n");
            for rule in &profile.rules {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    rule.name,
                    rule.condition,
                    rule.display_value(),
                    rule.status,
                    rule.comment
                ));
            }
            output.push_str(&format!("\n**{}**\n\n", profile.summary.headline));
        }

        output.push_str(&format!("_{CAPTION}_\n"));
        output
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    ticker: Option<String>,
    lens: Option<LensKind>,
    metrics: Option<ValuationMetrics>,
    verdict: Option<Verdict>,
    profile: Option<ProfileAssessment>,
    timestamp: Option<DateTime<Utc>>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticker.
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Set the lens.
    pub const fn lens(mut self, lens: LensKind) -> Self {
        self.lens = Some(lens);
        self
    }

    /// Set the computed metrics.
    pub const fn metrics(mut self, metrics: ValuationMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Set the lens verdict.
    pub fn verdict(mut self, verdict: Verdict) -> Self {
        self.verdict = Some(verdict);
        self
    }

    /// Attach a profile checklist.
    pub fn profile(mut self, profile: Option<ProfileAssessment>) -> Self {
        self.profile = profile;
        self
    }

    /// Override the generation timestamp (defaults to now).
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Build the report.
    ///
    /// The verdict defaults to evaluating the lens over the metrics.
    pub fn build(self) -> Result<ValuationReport, ReportError> {
        let ticker = self.ticker.ok_or(ReportError::MissingField("ticker"))?;
        let metrics = self.metrics.ok_or(ReportError::MissingField("metrics"))?;
        let lens = self.lens.unwrap_or_default();
        let verdict = self.verdict.unwrap_or_else(|| lens.evaluate(&metrics));

        let sections = MetricSection::ALL
            .into_iter()
            .map(|section| {
                let title = match section {
                    MetricSection::Core => format!("{} — {ticker}", section.title()),
                    _ => section.title().to_string(),
                };
                ReportSection::from_metrics(&metrics, section, title)
            })
            .collect();

        Ok(ValuationReport {
            ticker,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            lens,
            sections,
            verdict,
            profile: self.profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuelens_data::Ticker;
    use valuelens_data::fixtures::sample_financials;
    use valuelens_lenses::ProfileKind;

    fn sample_report(lens: LensKind) -> ValuationReport {
        let fin = sample_financials(Ticker::parse("AAPL").unwrap());
        let metrics = ValuationMetrics::compute(&fin);
        ReportBuilder::new()
            .ticker("AAPL")
            .lens(lens)
            .metrics(metrics)
            .profile(ProfileKind::for_lens(lens).map(|p| p.assess(&metrics.profile)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_report_builder() {
        let report = sample_report(LensKind::Burry);

        assert_eq!(report.ticker, "AAPL");
        assert_eq!(report.sections.len(), 3);
        assert_eq!(report.sections[0].title, "Core Metrics — AAPL");
        assert_eq!(report.sections[1].title, "Valuation Multiples / Yields");
        assert_eq!(report.verdict.lens, "Burry (EV/EBITDA)");
        assert!(report.profile.is_some());
    }

    #[test]
    fn test_builder_requires_ticker_and_metrics() {
        let err = ReportBuilder::new().build().unwrap_err();
        assert!(matches!(err, ReportError::MissingField("ticker")));

        let err = ReportBuilder::new().ticker("AAPL").build().unwrap_err();
        assert!(matches!(err, ReportError::MissingField("metrics")));
    }

    #[test]
    fn test_rows_are_formatted() {
        let report = sample_report(LensKind::Burry);
        assert_eq!(report.row("market_cap").unwrap().display, "3,200B");
        assert_eq!(report.row("ev_ebitda").unwrap().display, "24.86×");
        assert_eq!(report.row("fcf_yield").unwrap().display, "3.3%");
    }

    #[test]
    fn test_undefined_rows_are_blank() {
        let report = ReportBuilder::new()
            .ticker("EMPTY")
            .metrics(ValuationMetrics::default())
            .build()
            .unwrap();
        let multiples = report.section(MetricSection::Multiples).unwrap();
        assert!(multiples.rows.iter().all(|r| r.display.is_empty()));
        assert_eq!(report.verdict.verdict, "Weak");
    }

    #[test]
    fn test_ascii_table() {
        let report = sample_report(LensKind::Greenblatt);
        let ascii = report.to_ascii_table();
        assert!(ascii.contains("Superinvestor Valuation: AAPL"));
        assert!(ascii.contains("EV/EBITDA"));
        assert!(ascii.contains("Lens Verdict: Weak"));
        assert!(ascii.contains("Greenblatt – Magic Formula"));
        assert!(ascii.contains("not investment advice"));
    }

    #[test]
    fn test_markdown() {
        let report = sample_report(LensKind::Klarman);
        let markdown = report.to_markdown();
        assert!(markdown.contains("# Superinvestor Valuation: AAPL"));
        assert!(markdown.contains("## Returns on Capital"));
        assert!(markdown.contains("| Metric | Value |"));
        assert!(markdown.contains("**Conclusion:** Not an Asset Bargain"));
    }

    #[test]
    fn test_json() {
        let report = sample_report(LensKind::Einhorn);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["ticker"], "AAPL");
        assert_eq!(json["lens"], "einhorn");
        assert_eq!(json["verdict"]["Lens"], "Einhorn (Relative Value)");
        assert!(json["profile"].is_null());

        let block = report.verdict_json().unwrap();
        assert!(block.starts_with("{\n  \"Lens\""));
    }
}
