//! Export functionality for valuation reports and raw statements.
//!
//! CSV and JSON export for [`ValuationReport`] and quarterly
//! [`StatementExport`] tables.

use crate::report::ValuationReport;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use valuelens_data::StatementTable;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer produced invalid UTF-8.
    #[error("Invalid UTF-8 in output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn finish_csv(wtr: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Flattened report row for CSV export.
#[derive(Debug, Serialize)]
struct MetricRecord<'a> {
    section: &'a str,
    metric: &'a str,
    value: Option<f64>,
}

impl Exporter for ValuationReport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for section in &self.sections {
                    for row in &section.rows {
                        wtr.serialize(MetricRecord {
                            section: section.section.key(),
                            metric: row.label,
                            value: row.value,
                        })?;
                    }
                }
                for metric in &self.verdict.key_metrics {
                    wtr.serialize(MetricRecord {
                        section: "lens",
                        metric: metric.label,
                        value: metric.value,
                    })?;
                }
                finish_csv(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// One line item across periods.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatementRow {
    /// Provider label
    pub label: String,
    /// Values aligned with [`StatementExport::periods`]
    pub values: Vec<Option<f64>>,
}

/// A quarterly statement in export-ready shape.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatementExport {
    /// Ticker symbol.
    pub ticker: String,

    /// Statement kind key (`income`, `balance`, `cashflow`).
    pub kind: &'static str,

    /// Statement title.
    pub title: &'static str,

    /// Period end dates, oldest first.
    pub periods: Vec<NaiveDate>,

    /// Line items.
    pub rows: Vec<StatementRow>,
}

impl StatementExport {
    /// Build from a statement table.
    pub fn from_table(ticker: impl Into<String>, table: &StatementTable) -> Self {
        let periods = table.periods();
        let rows = table
            .labels()
            .map(|label| {
                let cells = table.row(label);
                StatementRow {
                    label: label.to_string(),
                    values: periods
                        .iter()
                        .map(|p| cells.and_then(|c| c.get(p).copied()))
                        .collect(),
                }
            })
            .collect();
        Self {
            ticker: ticker.into(),
            kind: table.kind().key(),
            title: table.kind().title(),
            periods,
            rows,
        }
    }

    /// Render as an ASCII table of the most recent `max_periods` quarters.
    pub fn to_ascii_table(&self, max_periods: usize) -> String {
        let skip = self.periods.len().saturating_sub(max_periods);
        let periods = &self.periods[skip..];

        let mut output = String::new();
        output.push_str(&format!("\n{} (quarterly): {}\n", self.title, self.ticker));
        output.push_str(&"=".repeat(40 + 14 * periods.len()));
        output.push('\n');

        output.push_str(&format!("{:<40}", "Line Item"));
        for p in periods {
            output.push_str(&format!("{:>14}", p.to_string()));
        }
        output.push('\n');
        output.push_str(&"-".repeat(40 + 14 * periods.len()));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!("{:<40}", truncate(&row.label, 39)));
            for v in &row.values[skip..] {
                output.push_str(&format!("{:>14}", crate::format::format_number(*v)));
            }
            output.push('\n');
        }
        output
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max - 1).collect();
        t.push('…');
        t
    }
}

impl Exporter for StatementExport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                let mut header = vec!["line_item".to_string()];
                header.extend(self.periods.iter().map(NaiveDate::to_string));
                wtr.write_record(&header)?;
                for row in &self.rows {
                    let mut record = vec![row.label.clone()];
                    record.extend(
                        row.values
                            .iter()
                            .map(|v| v.map(|x| x.to_string()).unwrap_or_default()),
                    );
                    wtr.write_record(&record)?;
                }
                finish_csv(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
