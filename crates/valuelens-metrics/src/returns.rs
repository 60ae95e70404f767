//! Returns on Capital
//!
//! ROIC on NOPAT over invested capital, and Greenblatt's return on capital
//! on EBIT over net working capital plus net PP&E.

use crate::fundamentals::CoreFinancials;
use crate::ratio::safe_div;
use serde::{Deserialize, Serialize};

/// Return-on-capital variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnsOnCapital {
    /// NOPAT / (debt + equity − cash)
    pub roic: Option<f64>,
    /// EBIT / (NWC + net PP&E)
    pub roc_greenblatt: Option<f64>,
}

impl ReturnsOnCapital {
    /// Compute returns from core fundamentals.
    pub fn compute(core: &CoreFinancials) -> Self {
        Self {
            roic: safe_div(core.nopat_ttm, core.invested_capital),
            roc_greenblatt: safe_div(core.ebit_ttm, core.magic_formula_capital),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compute() {
        let core = CoreFinancials {
            ebit_ttm: Some(100.0),
            nopat_ttm: Some(79.0),
            invested_capital: Some(395.0),
            magic_formula_capital: Some(400.0),
            ..Default::default()
        };
        let r = ReturnsOnCapital::compute(&core);
        assert_relative_eq!(r.roic.unwrap(), 0.2);
        assert_relative_eq!(r.roc_greenblatt.unwrap(), 0.25);
    }

    #[test]
    fn test_zero_capital_is_undefined() {
        let core = CoreFinancials {
            ebit_ttm: Some(100.0),
            nopat_ttm: Some(79.0),
            invested_capital: Some(0.0),
            magic_formula_capital: None,
            ..Default::default()
        };
        assert_eq!(ReturnsOnCapital::compute(&core), ReturnsOnCapital::default());
    }
}
