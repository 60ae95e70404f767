//! Metric Registry
//!
//! Display metadata for every metric row shown to the user. Allows lookup by
//! key and grouping by table section.

use serde::Serialize;

/// Table a metric is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricSection {
    /// TTM flows and MRQ balances
    Core,
    /// EV multiples and yields
    Multiples,
    /// Returns on capital
    Returns,
}

impl MetricSection {
    /// All sections in display order.
    pub const ALL: [Self; 3] = [Self::Core, Self::Multiples, Self::Returns];

    /// Table heading.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Core => "Core Metrics",
            Self::Multiples => "Valuation Multiples / Yields",
            Self::Returns => "Returns on Capital",
        }
    }

    /// Short heading for compact layouts.
    pub const fn short_title(&self) -> &'static str {
        match self {
            Self::Core => "Core Metrics",
            Self::Multiples => "Multiples / Yields",
            Self::Returns => "Returns",
        }
    }

    /// Identifier used in CSV/JSON output.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Multiples => "multiples",
            Self::Returns => "returns",
        }
    }
}

/// How a metric value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricFormat {
    /// Currency amount with B/M suffix
    Number,
    /// Fraction shown as a percentage
    Percent,
    /// Multiple shown with a `×` suffix
    Ratio,
}

/// Metric metadata
#[derive(Debug, Clone, Serialize)]
pub struct MetricInfo {
    /// Metric key (unique identifier)
    pub key: &'static str,
    /// Row label
    pub label: &'static str,
    /// Table section
    pub section: MetricSection,
    /// Display format
    pub format: MetricFormat,
    /// Brief description of what the metric measures
    pub description: &'static str,
}

const fn info(
    key: &'static str,
    label: &'static str,
    section: MetricSection,
    format: MetricFormat,
    description: &'static str,
) -> MetricInfo {
    MetricInfo {
        key,
        label,
        section,
        format,
        description,
    }
}

/// Get all available metric info, in display order
pub fn available_metrics() -> Vec<MetricInfo> {
    use MetricFormat::{Number, Percent, Ratio};
    use MetricSection::{Core, Multiples, Returns};

    vec![
        // Core
        info("market_cap", "Market Cap", Core, Number, "Equity market value"),
        info(
            "enterprise_value",
            "Enterprise Value (EV)",
            Core,
            Number,
            "Market cap plus debt less cash",
        ),
        info("revenue_ttm", "Revenue (TTM)", Core, Number, "Sum of the last four quarters of revenue"),
        info("ebit_ttm", "EBIT (TTM)", Core, Number, "Operating income over the last four quarters"),
        info(
            "depreciation_ttm",
            "Depreciation (TTM)",
            Core,
            Number,
            "Depreciation and amortization over the last four quarters",
        ),
        info("ebitda_ttm", "EBITDA (TTM)", Core, Number, "EBIT plus depreciation"),
        info("cfo_ttm", "CFO (TTM)", Core, Number, "Cash from operations"),
        info("capex_ttm", "CapEx (TTM)", Core, Number, "Capital expenditures as a positive outlay"),
        info("fcf_ttm", "FCF (TTM)", Core, Number, "CFO less CapEx"),
        info("debt_mrq", "Debt (MRQ)", Core, Number, "Total debt, most recent quarter"),
        info("cash_mrq", "Cash (MRQ)", Core, Number, "Cash and equivalents, most recent quarter"),
        info(
            "equity_mrq",
            "Total Equity (MRQ)",
            Core,
            Number,
            "Shareholders' equity, most recent quarter",
        ),
        info(
            "nwc_mrq",
            "NWC (MRQ)",
            Core,
            Number,
            "Current assets less current liabilities",
        ),
        info("net_ppe_mrq", "Net PPE (MRQ)", Core, Number, "Net property, plant and equipment"),
        info(
            "tax_rate",
            "Tax Rate (est.)",
            Core,
            Percent,
            "Income tax over pretax income, clamped to 0-35%",
        ),
        // Multiples / yields
        info("ev_ebitda", "EV/EBITDA", Multiples, Ratio, "Enterprise value over TTM EBITDA"),
        info("ev_ebit", "EV/EBIT", Multiples, Ratio, "Enterprise value over TTM EBIT"),
        info("ev_sales", "EV/Sales", Multiples, Ratio, "Enterprise value over TTM revenue"),
        info(
            "earnings_yield",
            "EBIT/EV (Earnings Yield)",
            Multiples,
            Percent,
            "TTM EBIT over enterprise value",
        ),
        info(
            "fcf_yield",
            "FCF Yield (to Equity)",
            Multiples,
            Percent,
            "TTM free cash flow over market cap",
        ),
        info("price_to_fcf", "P/FCF", Multiples, Ratio, "Market cap over TTM free cash flow"),
        // Returns
        info(
            "roic",
            "ROIC (NOPAT / Invested Capital)",
            Returns,
            Percent,
            "After-tax operating profit over debt plus equity less cash",
        ),
        info(
            "roc_greenblatt",
            "ROC (Greenblatt, EBIT / (NWC + Net PPE))",
            Returns,
            Percent,
            "EBIT over tangible operating capital",
        ),
    ]
}

/// Get metrics by section
pub fn metrics_by_section(section: MetricSection) -> Vec<MetricInfo> {
    available_metrics()
        .into_iter()
        .filter(|m| m.section == section)
        .collect()
}

/// Get metric info by key
pub fn get_metric_info(key: &str) -> Option<MetricInfo> {
    available_metrics().into_iter().find(|m| m.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_available_metrics_count() {
        // 15 core rows, 6 multiples, 2 returns
        assert_eq!(available_metrics().len(), 23);
    }

    #[test]
    fn test_metrics_by_section_sizes() {
        assert_eq!(metrics_by_section(MetricSection::Core).len(), 15);
        assert_eq!(metrics_by_section(MetricSection::Multiples).len(), 6);
        assert_eq!(metrics_by_section(MetricSection::Returns).len(), 2);
    }

    #[test]
    fn test_get_metric_info() {
        let ev_ebitda = get_metric_info("ev_ebitda").unwrap();
        assert_eq!(ev_ebitda.label, "EV/EBITDA");
        assert_eq!(ev_ebitda.section, MetricSection::Multiples);
        assert_eq!(ev_ebitda.format, MetricFormat::Ratio);

        assert!(get_metric_info("nonexistent_metric").is_none());
    }

    #[test]
    fn test_keys_unique() {
        let keys: HashSet<&str> = available_metrics().iter().map(|m| m.key).collect();
        assert_eq!(keys.len(), available_metrics().len());
    }

    #[test]
    fn test_section_order_matches_display() {
        let core = metrics_by_section(MetricSection::Core);
        assert_eq!(core.first().unwrap().label, "Market Cap");
        assert_eq!(core.last().unwrap().label, "Tax Rate (est.)");
    }
}
