#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/valuelens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod format;
pub mod pdf;
pub mod report;

pub use export::{ExportError, ExportFormat, Exporter, StatementExport, StatementRow};
pub use format::{format_metric, format_number, format_percent, format_ratio, with_thousands};
pub use pdf::{PDF_FOOTNOTE, PdfError, pdf_file_name, render_pdf, transliterate};
pub use report::{CAPTION, ReportBuilder, ReportError, ReportRow, ReportSection, ValuationReport};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
