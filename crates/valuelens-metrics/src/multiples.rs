//! Valuation Multiples and Yields
//!
//! Enterprise-value multiples, the EBIT earnings yield and free-cash-flow
//! yield to equity holders.

use crate::fundamentals::CoreFinancials;
use crate::ratio::safe_div;
use serde::{Deserialize, Serialize};

/// Multiples and yields over TTM figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Multiples {
    /// EV / EBITDA
    pub ev_ebitda: Option<f64>,
    /// EV / EBIT
    pub ev_ebit: Option<f64>,
    /// EV / Sales
    pub ev_sales: Option<f64>,
    /// EBIT / EV (earnings yield)
    pub earnings_yield: Option<f64>,
    /// FCF / market cap
    pub fcf_yield: Option<f64>,
    /// Market cap / FCF
    pub price_to_fcf: Option<f64>,
}

impl Multiples {
    /// Compute multiples from core fundamentals.
    pub fn compute(core: &CoreFinancials) -> Self {
        let ev = core.enterprise_value;
        Self {
            ev_ebitda: safe_div(ev, core.ebitda_ttm),
            ev_ebit: safe_div(ev, core.ebit_ttm),
            ev_sales: safe_div(ev, core.revenue_ttm),
            earnings_yield: safe_div(core.ebit_ttm, ev),
            fcf_yield: safe_div(core.fcf_ttm, core.market_cap),
            price_to_fcf: safe_div(core.market_cap, core.fcf_ttm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn core() -> CoreFinancials {
        CoreFinancials {
            market_cap: Some(800.0),
            enterprise_value: Some(1000.0),
            revenue_ttm: Some(500.0),
            ebit_ttm: Some(100.0),
            ebitda_ttm: Some(125.0),
            fcf_ttm: Some(80.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_compute() {
        let m = Multiples::compute(&core());
        assert_relative_eq!(m.ev_ebitda.unwrap(), 8.0);
        assert_relative_eq!(m.ev_ebit.unwrap(), 10.0);
        assert_relative_eq!(m.ev_sales.unwrap(), 2.0);
        assert_relative_eq!(m.earnings_yield.unwrap(), 0.1);
        assert_relative_eq!(m.fcf_yield.unwrap(), 0.1);
        assert_relative_eq!(m.price_to_fcf.unwrap(), 10.0);
    }

    #[test]
    fn test_missing_ebitda_only_blanks_ev_ebitda() {
        let core = CoreFinancials {
            ebitda_ttm: None,
            ..core()
        };
        let m = Multiples::compute(&core);
        assert!(m.ev_ebitda.is_none());
        assert!(m.ev_ebit.is_some());
        assert!(m.ev_sales.is_some());
        assert!(m.fcf_yield.is_some());
    }

    #[test]
    fn test_zero_ebitda_is_undefined() {
        let core = CoreFinancials {
            ebitda_ttm: Some(0.0),
            ..core()
        };
        assert!(Multiples::compute(&core).ev_ebitda.is_none());
    }

    #[test]
    fn test_missing_market_cap() {
        let core = CoreFinancials {
            market_cap: None,
            enterprise_value: None,
            ..core()
        };
        let m = Multiples::compute(&core);
        assert_eq!(m, Multiples::default());
    }

    #[test]
    fn test_negative_fcf_keeps_sign() {
        let core = CoreFinancials {
            fcf_ttm: Some(-40.0),
            ..core()
        };
        let m = Multiples::compute(&core);
        assert_relative_eq!(m.fcf_yield.unwrap(), -0.05);
        assert_relative_eq!(m.price_to_fcf.unwrap(), -20.0);
    }
}
