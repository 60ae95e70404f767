//! Server-rendered pages.

use html_escape::{encode_double_quoted_attribute, encode_text};
use valuelens::data::Ticker;
use valuelens::lenses::{LensKind, ProfileAssessment, ProfileKind};
use valuelens::output::{CAPTION, ReportSection, ValuationReport};

pub(crate) const INFO_LINE: &str =
    "Enter a ticker (e.g., AAPL, MSFT, TSLA) and click <strong>Run Analysis</strong>.";

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:960px;margin:2rem auto;\
padding:0 1rem;color:#222}table{border-collapse:collapse;margin-bottom:1.5rem}\
td,th{border:1px solid #ddd;padding:.3rem .6rem}td.num{text-align:right}\
.banner{padding:.8rem 1rem;border-radius:4px;margin:1rem 0}.error{background:#fde2e1}\
.info{background:#e8f1fb}.caption{color:#666;font-size:.85rem}\
pre{background:#f6f8fa;padding:1rem;overflow-x:auto}";

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
<title>Superinvestor Valuation</title><style>{STYLE}</style></head>\
<body><h1>Superinvestor Valuation</h1>{body}</body></html>\n"
    )
}

fn option(key: &str, label: &str, selected: bool) -> String {
    format!(
        "<option value=\"{key}\"{}>{}</option>",
        if selected { " selected" } else { "" },
        encode_text(label)
    )
}

fn form(ticker: &str, selected: LensKind, profile: Option<ProfileKind>) -> String {
    let lenses: String = LensKind::ALL
        .into_iter()
        .map(|lens| option(lens.key(), lens.label(), lens == selected))
        .collect();
    let mut profiles = option("", "Lens default", profile.is_none());
    for kind in ProfileKind::ALL {
        profiles.push_str(&option(kind.key(), kind.label(), profile == Some(kind)));
    }
    format!(
        "<form action=\"/analyze\" method=\"get\">\
<label>Ticker <input name=\"ticker\" value=\"{}\"></label> \
<label>Lens <select name=\"lens\">{lenses}</select></label> \
<label>Profile <select name=\"profile\">{profiles}</select></label> \
<button type=\"submit\">Run Analysis</button></form>",
        encode_double_quoted_attribute(ticker)
    )
}

/// Landing page with the form and the info line.
pub(crate) fn index_page() -> String {
    page(&format!(
        "{}<div class=\"banner info\">{INFO_LINE}</div>",
        form("AAPL", LensKind::default(), None)
    ))
}

/// Form plus an error banner.
pub(crate) fn error_page(
    ticker: &str,
    lens: LensKind,
    profile: Option<ProfileKind>,
    message: &str,
) -> String {
    page(&format!(
        "{}<div class=\"banner error\">{}</div>",
        form(ticker, lens, profile),
        encode_text(message)
    ))
}

fn metric_table(section: &ReportSection) -> String {
    let rows: String = section
        .rows
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td class=\"num\">{}</td></tr>",
                encode_text(row.label),
                encode_text(&row.display)
            )
        })
        .collect();
    format!(
        "<h2>{}</h2><table><tr><th>Metric</th><th>Value</th></tr>{rows}</table>",
        encode_text(&section.title)
    )
}

fn profile_table(profile: &ProfileAssessment) -> String {
    let rows: String = profile
        .rules
        .iter()
        .map(|rule| {
            format!(
                "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td><td>{}</td><td>{}</td></tr>",
                encode_text(rule.name),
                encode_text(rule.condition),
                encode_text(&rule.display_value()),
                rule.status,
                encode_text(rule.comment)
            )
        })
        .collect();
    format!(
        "<h2>{}</h2><table><tr><th>Rule</th><th>Condition</th><th>Value</th>\
<th>Status</th><th>Comment</th></tr>{rows}</table><p><strong>{}</strong></p>",
        encode_text(profile.profile.label()),
        encode_text(&profile.summary.headline)
    )
}

/// Full analysis page.
pub(crate) fn analysis_page(
    ticker: &Ticker,
    report: &ValuationReport,
    profile: Option<ProfileKind>,
    verdict_json: &str,
) -> String {
    let mut body = form(ticker.as_str(), report.lens, profile);
    for section in &report.sections {
        body.push_str(&metric_table(section));
    }
    body.push_str(&format!(
        "<h2>Lens Verdict</h2><pre>{}</pre>",
        encode_text(verdict_json)
    ));
    if let Some(profile) = &report.profile {
        body.push_str(&profile_table(profile));
    }
    let mut href = format!(
        "/report.pdf?ticker={}&lens={}",
        urlencoding::encode(ticker.as_str()),
        report.lens.key()
    );
    if let Some(kind) = profile {
        href.push_str(&format!("&profile={}", kind.key()));
    }
    body.push_str(&format!(
        "<p><a href=\"{}\">Download PDF report</a></p>",
        encode_double_quoted_attribute(&href)
    ));
    body.push_str(&format!("<p class=\"caption\">{}</p>", encode_text(CAPTION)));
    page(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuelens::Analysis;
    use valuelens::data::fixtures::sample_financials;

    fn sample_report(symbol: &str) -> (Ticker, ValuationReport) {
        let ticker = Ticker::parse(symbol).unwrap();
        let analysis = Analysis::from_financials(sample_financials(ticker.clone()), LensKind::Burry);
        let report = analysis.report().unwrap();
        (ticker, report)
    }

    #[test]
    fn test_index_lists_every_lens() {
        let html = index_page();
        for lens in LensKind::ALL {
            assert!(html.contains(&format!("value=\"{}\"", lens.key())));
        }
        for kind in ProfileKind::ALL {
            assert!(html.contains(&format!("value=\"{}\"", kind.key())));
        }
        assert!(html.contains("Run Analysis"));
    }

    #[test]
    fn test_error_page_escapes_input() {
        let html = error_page(
            "\"><script>alert(1)</script>",
            LensKind::Burry,
            None,
            "bad <ticker> & worse",
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;"));
        assert!(html.contains("bad &lt;ticker&gt; &amp; worse"));
    }

    #[test]
    fn test_pdf_link_encodes_ticker() {
        let (ticker, report) = sample_report("^GSPC");
        let html = analysis_page(&ticker, &report, None, "{}");
        assert!(html.contains("/report.pdf?ticker=%5EGSPC&amp;lens=burry\""));

        let (ticker, report) = sample_report("EURUSD=X");
        let html = analysis_page(&ticker, &report, Some(ProfileKind::Graham), "{}");
        assert!(html.contains("ticker=EURUSD%3DX&amp;lens=burry&amp;profile=graham\""));
        assert!(html.contains("<option value=\"graham\" selected>"));
    }

    #[test]
    fn test_verdict_json_kept_readable() {
        let (ticker, report) = sample_report("AAPL");
        let html = analysis_page(&ticker, &report, None, "{\"Lens\": \"A & B\"}");
        assert!(html.contains("<pre>{\"Lens\": \"A &amp; B\"}</pre>"));
    }
}
