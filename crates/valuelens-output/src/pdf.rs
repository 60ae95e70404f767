//! Single-page PDF rendering.
//!
//! Lays a [`ValuationReport`] out on one US-letter page with the built-in
//! Helvetica faces. Built-in fonts only cover Latin-1, so text is
//! transliterated to ASCII before it is written.

use crate::report::ValuationReport;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use thiserror::Error;
use valuelens_lenses::LensKind;

/// Footnote printed at the bottom of every page.
pub const PDF_FOOTNOTE: &str =
    "Data via Yahoo Finance; TTM = sum of last 4 quarters. Educational; not investment advice.";

const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 19.05;
const LINE: f32 = 4.94;
const VALUE_COLUMN: f32 = 110.0;

/// Errors that can occur while rendering a PDF.
#[derive(Debug, Error)]
pub enum PdfError {
    /// The PDF backend failed.
    #[error("PDF rendering failed: {0}")]
    Render(String),
}

fn render_err<E: std::fmt::Display>(err: E) -> PdfError {
    PdfError::Render(err.to_string())
}

/// `{TICKER}_{lens}_valuation.pdf`
pub fn pdf_file_name(ticker: &str, lens: LensKind) -> String {
    format!("{ticker}_{}_valuation.pdf", lens.key())
}

/// Replace glyphs the built-in fonts cannot draw.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '→' => out.push_str("->"),
            '≥' => out.push_str(">="),
            '≤' => out.push_str("<="),
            '×' => out.push('x'),
            '—' | '–' | '−' => out.push('-'),
            '≈' => out.push('~'),
            '…' => out.push_str("..."),
            c if c.is_ascii() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

struct Cursor {
    layer: PdfLayerReference,
    y: f32,
}

impl Cursor {
    fn text(&self, text: &str, size: f32, x: f32, font: &IndirectFontRef) {
        self.layer
            .use_text(transliterate(text), size, Mm(MARGIN + x), Mm(self.y), font);
    }

    fn advance(&mut self, lines: f32) {
        self.y -= LINE * lines;
    }

    fn has_room(&self) -> bool {
        self.y > MARGIN + 2.0 * LINE
    }
}

/// Render a report to PDF bytes.
pub fn render_pdf(report: &ValuationReport) -> Result<Vec<u8>, PdfError> {
    let title = format!("Superinvestor Valuation — {}", report.ticker);
    let doc_title = transliterate(&title);
    let (doc, page, layer) =
        PdfDocument::new(doc_title.as_str(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(render_err)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(render_err)?,
        oblique: doc.add_builtin_font(BuiltinFont::HelveticaOblique).map_err(render_err)?,
    };

    let mut cursor = Cursor {
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT - MARGIN,
    };

    cursor.text(&title, 14.0, 0.0, &fonts.bold);
    cursor.advance(1.5);
    cursor.text(&format!("Lens: {}", report.lens.name()), 10.0, 0.0, &fonts.regular);
    cursor.advance(2.0);

    for section in &report.sections {
        if !cursor.has_room() {
            break;
        }
        cursor.text(section.section.short_title(), 11.0, 0.0, &fonts.bold);
        cursor.advance(1.2);
        for row in &section.rows {
            if !cursor.has_room() {
                break;
            }
            cursor.text(row.label, 9.0, 0.0, &fonts.regular);
            cursor.text(&row.display, 9.0, VALUE_COLUMN, &fonts.regular);
            cursor.advance(1.0);
        }
        cursor.advance(0.8);
    }

    if cursor.has_room() {
        cursor.text("Verdict", 11.0, 0.0, &fonts.bold);
        cursor.advance(1.2);
        cursor.text(
            &format!("Conclusion: {}", report.verdict.verdict),
            9.0,
            0.0,
            &fonts.regular,
        );
        cursor.advance(1.0);
        for note in &report.verdict.heuristics {
            if !cursor.has_room() {
                break;
            }
            cursor.text(&format!("- {note}"), 9.0, 0.0, &fonts.regular);
            cursor.advance(1.0);
        }
    }

    cursor.y = MARGIN;
    cursor.text(PDF_FOOTNOTE, 8.0, 0.0, &fonts.oblique);
    drop(cursor);

    doc.save_to_bytes().map_err(render_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportBuilder;
    use valuelens_data::Ticker;
    use valuelens_data::fixtures::sample_financials;
    use valuelens_metrics::ValuationMetrics;

    #[test]
    fn test_render_pdf() {
        let fin = sample_financials(Ticker::parse("AAPL").unwrap());
        let report = ReportBuilder::new()
            .ticker("AAPL")
            .lens(LensKind::Burry)
            .metrics(ValuationMetrics::compute(&fin))
            .build()
            .unwrap();

        let bytes = render_pdf(&report).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn test_render_pdf_with_blank_metrics() {
        let report = ReportBuilder::new()
            .ticker("EMPTY")
            .metrics(ValuationMetrics::default())
            .build()
            .unwrap();
        assert!(render_pdf(&report).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_transliterate() {
        assert_eq!(
            transliterate("EV/EBITDA ≥ 8 → not obviously cheap"),
            "EV/EBITDA >= 8 -> not obviously cheap"
        );
        assert_eq!(transliterate("24.86× — ok"), "24.86x - ok");
        assert_eq!(transliterate("Debt + Equity − Cash ≈ 0"), "Debt + Equity - Cash ~ 0");
        assert!(transliterate("Graham – Deep Value").is_ascii());
    }

    #[test]
    fn test_pdf_file_name() {
        assert_eq!(pdf_file_name("AAPL", LensKind::Burry), "AAPL_burry_valuation.pdf");
    }
}
