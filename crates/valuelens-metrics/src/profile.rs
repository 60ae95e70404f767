//! Profile Metrics
//!
//! The broader ratio set the investor-profile checklists score: earnings
//! multiples, profitability, growth and balance-sheet strength.

use crate::fundamentals::CoreFinancials;
use crate::multiples::Multiples;
use crate::ratio::{growth, safe_div};
use serde::{Deserialize, Serialize};
use valuelens_data::{LineItem, QuarterlyFinancials};

/// Valuation, quality, growth and leverage ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetrics {
    /// Market cap / net income (TTM), only for positive earnings
    pub pe: Option<f64>,
    /// Market cap / equity
    pub pb: Option<f64>,
    /// 1 / P/E
    pub earnings_yield: Option<f64>,
    /// FCF / market cap
    pub fcf_yield: Option<f64>,
    /// EV / EBITDA
    pub ev_ebitda: Option<f64>,
    /// P/E divided by growth in percent
    pub peg: Option<f64>,
    /// Net income / equity
    pub roe: Option<f64>,
    /// Gross profit / revenue
    pub gross_margin: Option<f64>,
    /// EBIT / revenue
    pub operating_margin: Option<f64>,
    /// Net income / revenue
    pub net_margin: Option<f64>,
    /// FCF / net income
    pub fcf_conversion: Option<f64>,
    /// Latest quarter revenue vs the same quarter a year earlier
    pub revenue_growth: Option<f64>,
    /// Latest quarter net income vs the same quarter a year earlier
    pub earnings_growth: Option<f64>,
    /// Debt / equity
    pub debt_to_equity: Option<f64>,
    /// Current assets / current liabilities
    pub current_ratio: Option<f64>,
}

impl ProfileMetrics {
    /// Compute profile ratios.
    pub fn compute(fin: &QuarterlyFinancials, core: &CoreFinancials, multiples: &Multiples) -> Self {
        let positive_earnings = core.net_income_ttm.filter(|ni| *ni > 0.0);
        let pe = safe_div(core.market_cap, positive_earnings);
        let earnings_yield = pe.filter(|pe| *pe > 0.0).and_then(|pe| safe_div(Some(1.0), Some(pe)));

        let revenue_growth = growth(fin.mrq(LineItem::Revenue), fin.year_ago(LineItem::Revenue));
        let earnings_growth =
            growth(fin.mrq(LineItem::NetIncome), fin.year_ago(LineItem::NetIncome));

        // Earnings growth when available, revenue growth otherwise
        let peg_growth = earnings_growth.or(revenue_growth).filter(|g| *g > 0.0);
        let peg = safe_div(pe, peg_growth.map(|g| g * 100.0));

        Self {
            pe,
            pb: core.price_to_book(),
            earnings_yield,
            fcf_yield: multiples.fcf_yield,
            ev_ebitda: multiples.ev_ebitda,
            peg,
            roe: safe_div(core.net_income_ttm, core.equity_mrq),
            gross_margin: safe_div(core.gross_profit_ttm, core.revenue_ttm),
            operating_margin: safe_div(core.ebit_ttm, core.revenue_ttm),
            net_margin: safe_div(core.net_income_ttm, core.revenue_ttm),
            fcf_conversion: safe_div(core.fcf_ttm, core.net_income_ttm),
            revenue_growth,
            earnings_growth,
            debt_to_equity: safe_div(core.debt_mrq, core.equity_mrq),
            current_ratio: safe_div(core.current_assets_mrq, core.current_liabilities_mrq),
        }
    }
}
