//! Core Financials
//!
//! Trailing-twelve-month flows and most-recent-quarter balances derived from
//! quarterly statements, plus the few composite figures the multiples and
//! returns are built on (tax rate, NOPAT, enterprise value, capital bases).

use crate::ratio::{add, finite, safe_div, sub};
use serde::{Deserialize, Serialize};
use valuelens_data::{LineItem, QuarterlyFinancials};

/// Configuration for the tax-rate estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Rate used when tax or pretax income is unavailable (default: 0.21)
    pub fallback_tax_rate: f64,
    /// Upper clamp on the effective rate (default: 0.35)
    pub max_tax_rate: f64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            fallback_tax_rate: 0.21,
            max_tax_rate: 0.35,
        }
    }
}

/// TTM and MRQ fundamentals for one ticker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreFinancials {
    /// Market capitalisation
    pub market_cap: Option<f64>,
    /// Market cap + debt − cash
    pub enterprise_value: Option<f64>,
    /// Revenue (TTM)
    pub revenue_ttm: Option<f64>,
    /// Gross profit (TTM)
    pub gross_profit_ttm: Option<f64>,
    /// Operating income / EBIT (TTM)
    pub ebit_ttm: Option<f64>,
    /// Depreciation and amortization (TTM)
    pub depreciation_ttm: Option<f64>,
    /// EBIT + depreciation (TTM)
    pub ebitda_ttm: Option<f64>,
    /// Net income (TTM)
    pub net_income_ttm: Option<f64>,
    /// Cash from operations (TTM)
    pub cfo_ttm: Option<f64>,
    /// Capital expenditures as a positive outlay (TTM)
    pub capex_ttm: Option<f64>,
    /// CFO − CapEx (TTM)
    pub fcf_ttm: Option<f64>,
    /// Total debt (MRQ)
    pub debt_mrq: Option<f64>,
    /// Cash and equivalents (MRQ)
    pub cash_mrq: Option<f64>,
    /// Shareholders' equity (MRQ)
    pub equity_mrq: Option<f64>,
    /// Current assets (MRQ)
    pub current_assets_mrq: Option<f64>,
    /// Current liabilities (MRQ)
    pub current_liabilities_mrq: Option<f64>,
    /// Current assets − current liabilities (MRQ)
    pub nwc_mrq: Option<f64>,
    /// Net PP&E (MRQ)
    pub net_ppe_mrq: Option<f64>,
    /// Shares outstanding (MRQ)
    pub shares_mrq: Option<f64>,
    /// Effective tax rate estimate, always defined
    pub tax_rate: f64,
    /// EBIT × (1 − tax rate)
    pub nopat_ttm: Option<f64>,
    /// Debt + equity − cash
    pub invested_capital: Option<f64>,
    /// NWC + net PP&E (Greenblatt's capital base)
    pub magic_formula_capital: Option<f64>,
}

impl CoreFinancials {
    /// Derive core fundamentals with the default configuration.
    pub fn from_quarterly(fin: &QuarterlyFinancials) -> Self {
        Self::from_quarterly_with(fin, &CoreConfig::default())
    }

    /// Derive core fundamentals.
    pub fn from_quarterly_with(fin: &QuarterlyFinancials, config: &CoreConfig) -> Self {
        let market_cap = fin.market_cap.and_then(finite);

        let revenue_ttm = fin.ttm(LineItem::Revenue);
        let gross_profit_ttm = fin.ttm(LineItem::GrossProfit);
        let ebit_ttm = fin.ttm(LineItem::OperatingIncome);
        let depreciation_ttm = fin.ttm(LineItem::Depreciation);
        let net_income_ttm = fin.ttm(LineItem::NetIncome);
        let cfo_ttm = fin.ttm(LineItem::OperatingCashFlow);
        // Reported as a negative cash flow by most providers
        let capex_ttm = fin.ttm(LineItem::CapitalExpenditure).map(f64::abs);

        let ebitda_ttm = add(ebit_ttm, depreciation_ttm);
        let fcf_ttm = sub(cfo_ttm, capex_ttm);

        let debt_mrq = fin.mrq(LineItem::TotalDebt);
        let cash_mrq = fin.mrq(LineItem::Cash);
        let equity_mrq = fin.mrq(LineItem::Equity);
        let current_assets_mrq = fin.mrq(LineItem::CurrentAssets);
        let current_liabilities_mrq = fin.mrq(LineItem::CurrentLiabilities);
        let net_ppe_mrq = fin.mrq(LineItem::NetPpe);
        let shares_mrq = fin.mrq(LineItem::SharesOutstanding);
        let nwc_mrq = sub(current_assets_mrq, current_liabilities_mrq);

        let tax_rate = estimate_tax_rate(
            fin.ttm(LineItem::TaxExpense),
            fin.ttm(LineItem::PretaxIncome),
            config,
        );
        let nopat_ttm = ebit_ttm.and_then(|ebit| finite(ebit * (1.0 - tax_rate)));

        let net_debt = debt_mrq.unwrap_or(0.0) - cash_mrq.unwrap_or(0.0);
        let enterprise_value = market_cap.and_then(|mc| finite(mc + net_debt));
        let invested_capital = equity_mrq.and_then(|eq| finite(eq + net_debt));
        let magic_formula_capital = add(nwc_mrq, net_ppe_mrq);

        Self {
            market_cap,
            enterprise_value,
            revenue_ttm,
            gross_profit_ttm,
            ebit_ttm,
            depreciation_ttm,
            ebitda_ttm,
            net_income_ttm,
            cfo_ttm,
            capex_ttm,
            fcf_ttm,
            debt_mrq,
            cash_mrq,
            equity_mrq,
            current_assets_mrq,
            current_liabilities_mrq,
            nwc_mrq,
            net_ppe_mrq,
            shares_mrq,
            tax_rate,
            nopat_ttm,
            invested_capital,
            magic_formula_capital,
        }
    }

    /// Rough net current asset value: NWC + cash − debt.
    ///
    /// Missing cash or debt count as zero; NWC is required.
    pub fn ncav_estimate(&self) -> Option<f64> {
        let nwc = self.nwc_mrq?;
        finite(nwc + self.cash_mrq.unwrap_or(0.0) - self.debt_mrq.unwrap_or(0.0))
    }

    /// Price to book: market cap / equity.
    pub fn price_to_book(&self) -> Option<f64> {
        safe_div(self.market_cap, self.equity_mrq)
    }
}

/// Effective tax rate: `|tax| / |pretax|` clamped to `[0, max]`, or the
/// fallback when either input is missing or pretax income is zero.
pub fn estimate_tax_rate(tax: Option<f64>, pretax: Option<f64>, config: &CoreConfig) -> f64 {
    match (tax, pretax) {
        (Some(tax), Some(pretax)) if pretax != 0.0 => {
            (tax.abs() / pretax.abs()).clamp(0.0, config.max_tax_rate)
        }
        _ => config.fallback_tax_rate,
    }
}
