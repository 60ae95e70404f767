//! Built-in sample statements.
//!
//! Five quarters of figures shaped like a large-cap consumer technology
//! company (values in USD). Used by the offline mode of the binary and by
//! tests throughout the workspace.

use crate::financials::QuarterlyFinancials;
use crate::statement::StatementKind;
use crate::ticker::Ticker;
use chrono::NaiveDate;

/// Fiscal period ends of the sample, oldest first.
pub const SAMPLE_PERIODS: [(i32, u32, u32); 5] = [
    (2023, 6, 30),
    (2023, 9, 30),
    (2023, 12, 31),
    (2024, 3, 31),
    (2024, 6, 30),
];

/// Market capitalisation of the sample.
pub const SAMPLE_MARKET_CAP: f64 = 3.2e12;

const INCOME: &[(&str, [f64; 5])] = &[
    ("Total Revenue", [81.80, 89.50, 119.58, 90.75, 85.78]),
    ("Gross Profit", [36.41, 40.43, 54.86, 42.27, 39.68]),
    ("Operating Income", [22.99, 26.97, 40.37, 27.90, 25.35]),
    ("Pretax Income", [22.73, 26.99, 40.32, 28.06, 25.49]),
    ("Tax Provision", [2.85, 4.04, 6.41, 4.42, 4.05]),
    ("Net Income", [19.88, 22.96, 33.92, 23.64, 21.45]),
];

const CASH_FLOW: &[(&str, [f64; 5])] = &[
    ("Operating Cash Flow", [26.38, 21.60, 39.90, 22.69, 28.86]),
    ("Depreciation And Amortization", [3.05, 2.65, 2.85, 2.84, 2.85]),
    ("Capital Expenditure", [-2.09, -2.16, -2.39, -1.99, -2.15]),
];

const BALANCE_SHEET: &[(&str, [f64; 5])] = &[
    ("Total Debt", [109.28, 111.09, 108.04, 104.59, 101.30]),
    ("Cash And Cash Equivalents", [28.41, 29.97, 40.76, 32.70, 25.57]),
    ("Stockholders Equity", [60.27, 62.15, 74.10, 74.19, 66.71]),
    ("Current Assets", [122.66, 143.57, 143.69, 128.42, 125.44]),
    ("Current Liabilities", [124.96, 145.31, 133.97, 123.82, 131.62]),
    ("Net PPE", [43.55, 43.72, 43.67, 43.55, 44.50]),
    ("Ordinary Shares Number", [15.65, 15.55, 15.46, 15.34, 15.22]),
];

/// Sample quarterly statements reported under `ticker`.
pub fn sample_financials(ticker: Ticker) -> QuarterlyFinancials {
    let periods: Vec<NaiveDate> = SAMPLE_PERIODS
        .iter()
        .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(*y, *m, *d))
        .collect();

    let mut financials = QuarterlyFinancials::new(ticker).with_market_cap(Some(SAMPLE_MARKET_CAP));
    for (kind, rows) in [
        (StatementKind::Income, INCOME),
        (StatementKind::CashFlow, CASH_FLOW),
        (StatementKind::BalanceSheet, BALANCE_SHEET),
    ] {
        let table = financials.statement_mut(kind);
        for (label, values) in rows {
            for (period_end, value) in periods.iter().zip(values) {
                table.insert(*label, *period_end, value * 1e9);
            }
        }
    }
    financials
}
