//! Valuation Metrics
//!
//! Everything computed for one ticker in a single bundle, with lookup by
//! registry key for table rendering.

use crate::error::{MetricsError, Result};
use crate::fundamentals::{CoreConfig, CoreFinancials};
use crate::multiples::Multiples;
use crate::profile::ProfileMetrics;
use crate::registry::{MetricInfo, MetricSection, metrics_by_section};
use crate::returns::ReturnsOnCapital;
use serde::{Deserialize, Serialize};
use valuelens_data::QuarterlyFinancials;

/// Core fundamentals, multiples, returns and profile ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationMetrics {
    /// TTM flows and MRQ balances
    pub core: CoreFinancials,
    /// Multiples and yields
    pub multiples: Multiples,
    /// Returns on capital
    pub returns: ReturnsOnCapital,
    /// Ratios used by the investor profiles
    pub profile: ProfileMetrics,
}

impl ValuationMetrics {
    /// Compute every metric with the default configuration.
    pub fn compute(fin: &QuarterlyFinancials) -> Self {
        Self::compute_with(fin, &CoreConfig::default())
    }

    /// Compute every metric.
    pub fn compute_with(fin: &QuarterlyFinancials, config: &CoreConfig) -> Self {
        let core = CoreFinancials::from_quarterly_with(fin, config);
        let multiples = Multiples::compute(&core);
        let returns = ReturnsOnCapital::compute(&core);
        let profile = ProfileMetrics::compute(fin, &core, &multiples);
        Self {
            core,
            multiples,
            returns,
            profile,
        }
    }

    /// Value of a registry metric; `Ok(None)` when undefined.
    pub fn value(&self, key: &str) -> Result<Option<f64>> {
        let c = &self.core;
        let m = &self.multiples;
        let value = match key {
            "market_cap" => c.market_cap,
            "enterprise_value" => c.enterprise_value,
            "revenue_ttm" => c.revenue_ttm,
            "ebit_ttm" => c.ebit_ttm,
            "depreciation_ttm" => c.depreciation_ttm,
            "ebitda_ttm" => c.ebitda_ttm,
            "cfo_ttm" => c.cfo_ttm,
            "capex_ttm" => c.capex_ttm,
            "fcf_ttm" => c.fcf_ttm,
            "debt_mrq" => c.debt_mrq,
            "cash_mrq" => c.cash_mrq,
            "equity_mrq" => c.equity_mrq,
            "nwc_mrq" => c.nwc_mrq,
            "net_ppe_mrq" => c.net_ppe_mrq,
            "tax_rate" => Some(c.tax_rate),
            "ev_ebitda" => m.ev_ebitda,
            "ev_ebit" => m.ev_ebit,
            "ev_sales" => m.ev_sales,
            "earnings_yield" => m.earnings_yield,
            "fcf_yield" => m.fcf_yield,
            "price_to_fcf" => m.price_to_fcf,
            "roic" => self.returns.roic,
            "roc_greenblatt" => self.returns.roc_greenblatt,
            other => return Err(MetricsError::UnknownMetric(other.to_string())),
        };
        Ok(value)
    }

    /// Rows of one table section, in display order.
    pub fn section(&self, section: MetricSection) -> Vec<(MetricInfo, Option<f64>)> {
        metrics_by_section(section)
            .into_iter()
            .map(|info| {
                let value = self.value(info.key).ok().flatten();
                (info, value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::available_metrics;
    use approx::assert_relative_eq;
    use valuelens_data::Ticker;
    use valuelens_data::fixtures::sample_financials;

    #[test]
    fn test_every_registry_key_resolves() {
        let metrics = ValuationMetrics::default();
        for info in available_metrics() {
            assert!(metrics.value(info.key).is_ok(), "{}", info.key);
        }
    }

    #[test]
    fn test_unknown_key() {
        let metrics = ValuationMetrics::default();
        assert!(matches!(
            metrics.value("pe_forward"),
            Err(MetricsError::UnknownMetric(k)) if k == "pe_forward"
        ));
    }

    #[test]
    fn test_compute_sample() {
        let fin = sample_financials(Ticker::parse("AAPL").unwrap());
        let metrics = ValuationMetrics::compute(&fin);

        let ev = 3.2e12 + 101.30e9 - 25.57e9;
        assert_relative_eq!(
            metrics.value("ev_ebitda").unwrap().unwrap(),
            ev / 131.78e9,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            metrics.value("roc_greenblatt").unwrap().unwrap(),
            120.59e9 / (-6.18e9 + 44.50e9),
            max_relative = 1e-9
        );

        let returns = metrics.section(MetricSection::Returns);
        assert_eq!(returns.len(), 2);
        assert!(returns.iter().all(|(_, v)| v.is_some()));
    }

    #[test]
    fn test_serializes() {
        let fin = sample_financials(Ticker::parse("AAPL").unwrap());
        let json = serde_json::to_value(ValuationMetrics::compute(&fin)).unwrap();
        assert!(json["core"]["ebit_ttm"].is_number());
        assert!(json["multiples"]["ev_ebitda"].is_number());
    }
}
