//! Quarterly statement tables and line-item lookup.
//!
//! Providers label the same concept differently ("Total Revenue" vs
//! "quarterlyTotalRevenue" vs "Revenue"). Each [`LineItem`] carries an ordered
//! list of candidate labels; lookups compare labels after [`normalize_label`]
//! and the first candidate present in a table wins.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// Number of quarters summed into a trailing-twelve-month figure.
pub const TTM_QUARTERS: usize = 4;

/// Which financial statement a table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatementKind {
    /// Income statement
    Income,
    /// Balance sheet
    BalanceSheet,
    /// Cash flow statement
    CashFlow,
}

impl StatementKind {
    /// All statement kinds.
    pub const ALL: [Self; 3] = [Self::Income, Self::BalanceSheet, Self::CashFlow];

    /// Short identifier used on the command line.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::BalanceSheet => "balance",
            Self::CashFlow => "cashflow",
        }
    }

    /// Human readable title.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Income => "Income Statement",
            Self::BalanceSheet => "Balance Sheet",
            Self::CashFlow => "Cash Flow Statement",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for StatementKind {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "is" => Ok(Self::Income),
            "balance" | "balance-sheet" | "bs" => Ok(Self::BalanceSheet),
            "cashflow" | "cash-flow" | "cf" => Ok(Self::CashFlow),
            other => Err(DataError::Parse(format!("unknown statement kind: {}", other))),
        }
    }
}

/// A logical line item, resolved against provider labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineItem {
    /// Total revenue / sales
    Revenue,
    /// Gross profit
    GrossProfit,
    /// Operating income (EBIT)
    OperatingIncome,
    /// Net income
    NetIncome,
    /// Income tax expense
    TaxExpense,
    /// Income before tax
    PretaxIncome,
    /// Depreciation and amortization
    Depreciation,
    /// Cash from operations
    OperatingCashFlow,
    /// Capital expenditures
    CapitalExpenditure,
    /// Total debt
    TotalDebt,
    /// Cash and equivalents
    Cash,
    /// Shareholders' equity
    Equity,
    /// Total current assets
    CurrentAssets,
    /// Total current liabilities
    CurrentLiabilities,
    /// Net property, plant and equipment
    NetPpe,
    /// Ordinary shares outstanding
    SharesOutstanding,
}

impl LineItem {
    /// Every line item the engine understands.
    pub const ALL: [Self; 16] = [
        Self::Revenue,
        Self::GrossProfit,
        Self::OperatingIncome,
        Self::NetIncome,
        Self::TaxExpense,
        Self::PretaxIncome,
        Self::Depreciation,
        Self::OperatingCashFlow,
        Self::CapitalExpenditure,
        Self::TotalDebt,
        Self::Cash,
        Self::Equity,
        Self::CurrentAssets,
        Self::CurrentLiabilities,
        Self::NetPpe,
        Self::SharesOutstanding,
    ];

    /// The statement this item is reported on.
    pub const fn statement(&self) -> StatementKind {
        match self {
            Self::Revenue
            | Self::GrossProfit
            | Self::OperatingIncome
            | Self::NetIncome
            | Self::TaxExpense
            | Self::PretaxIncome => StatementKind::Income,
            Self::Depreciation | Self::OperatingCashFlow | Self::CapitalExpenditure => {
                StatementKind::CashFlow
            }
            Self::TotalDebt
            | Self::Cash
            | Self::Equity
            | Self::CurrentAssets
            | Self::CurrentLiabilities
            | Self::NetPpe
            | Self::SharesOutstanding => StatementKind::BalanceSheet,
        }
    }

    /// Candidate provider labels, in priority order.
    pub const fn candidates(&self) -> &'static [&'static str] {
        match self {
            Self::Revenue => &["Total Revenue", "Revenue", "Sales", "Operating Revenue"],
            Self::GrossProfit => &["Gross Profit"],
            Self::OperatingIncome => &[
                "Operating Income",
                "EBIT",
                "Earnings Before Interest And Taxes",
            ],
            Self::NetIncome => &[
                "Net Income",
                "Net Income Common Stockholders",
                "Net Income From Continuing Operation Net Minority Interest",
            ],
            Self::TaxExpense => &[
                "Income Tax Expense",
                "Tax Provision",
                "Provision For Income Taxes",
            ],
            Self::PretaxIncome => &["Income Before Tax", "Pretax Income"],
            Self::Depreciation => &[
                "Depreciation And Amortization",
                "Depreciation Amortization Depletion",
                "Depreciation",
                "Depreciation & Amortization",
                "Reconciled Depreciation",
            ],
            Self::OperatingCashFlow => &[
                "Total Cash From Operating Activities",
                "Operating Cash Flow",
                "Cash Flow From Continuing Operating Activities",
                "Net Cash Provided By Operating Activities",
            ],
            Self::CapitalExpenditure => &[
                "Capital Expenditures",
                "Capital Expenditure",
                "Purchase Of PPE",
                "Investment In Property Plant And Equipment",
            ],
            Self::TotalDebt => &[
                "Total Debt",
                "Short Long Term Debt",
                "Long Term Debt",
                "Short Term Debt",
            ],
            Self::Cash => &[
                "Cash And Cash Equivalents",
                "Cash And Short Term Investments",
                "Cash Cash Equivalents And Short Term Investments",
            ],
            Self::Equity => &[
                "Total Stockholder Equity",
                "Stockholders Equity",
                "Total Equity Gross Minority Interest",
                "Common Stock Equity",
            ],
            Self::CurrentAssets => &["Total Current Assets", "Current Assets"],
            Self::CurrentLiabilities => &["Total Current Liabilities", "Current Liabilities"],
            Self::NetPpe => &[
                "Property Plant Equipment Net",
                "Net PPE",
                "Property Plant And Equipment Net",
            ],
            Self::SharesOutstanding => &[
                "Ordinary Shares Number",
                "Share Issued",
                "Common Stock Shares Outstanding",
            ],
        }
    }

    /// Snake-case identifier, used for DataFrame columns and JSON keys.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::GrossProfit => "gross_profit",
            Self::OperatingIncome => "operating_income",
            Self::NetIncome => "net_income",
            Self::TaxExpense => "tax_expense",
            Self::PretaxIncome => "pretax_income",
            Self::Depreciation => "depreciation",
            Self::OperatingCashFlow => "operating_cash_flow",
            Self::CapitalExpenditure => "capital_expenditure",
            Self::TotalDebt => "total_debt",
            Self::Cash => "cash",
            Self::Equity => "equity",
            Self::CurrentAssets => "current_assets",
            Self::CurrentLiabilities => "current_liabilities",
            Self::NetPpe => "net_ppe",
            Self::SharesOutstanding => "shares_outstanding",
        }
    }
}

/// Normalize a provider label for comparison.
///
/// Lower-cases, drops everything that is not alphanumeric and strips the
/// period prefixes Yahoo puts on time-series keys.
///
/// ```
/// use valuelens_data::statement::normalize_label;
///
/// assert_eq!(normalize_label("quarterlyTotalRevenue"), "totalrevenue");
/// assert_eq!(normalize_label("Total Revenue"), "totalrevenue");
/// assert_eq!(normalize_label("Depreciation & Amortization"), "depreciationamortization");
/// ```
pub fn normalize_label(label: &str) -> String {
    let flat: String = label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    for prefix in ["quarterly", "trailing", "annual"] {
        if let Some(rest) = flat.strip_prefix(prefix)
            && !rest.is_empty()
        {
            return rest.to_string();
        }
    }
    flat
}

/// One statement as a table of line items by fiscal period end.
///
/// Cells that the provider did not report are simply absent; lookups return
/// `None` for them.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementTable {
    kind: StatementKind,
    periods: BTreeSet<NaiveDate>,
    rows: BTreeMap<String, BTreeMap<NaiveDate, f64>>,
}

impl StatementTable {
    /// Create an empty table.
    pub const fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            periods: BTreeSet::new(),
            rows: BTreeMap::new(),
        }
    }

    /// Statement kind.
    pub const fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Record one cell. Non-finite values are dropped.
    pub fn insert(&mut self, label: impl Into<String>, period_end: NaiveDate, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.periods.insert(period_end);
        self.rows
            .entry(label.into())
            .or_default()
            .insert(period_end, value);
    }

    /// Record a whole row, one value per period. `None` leaves the cell empty.
    pub fn insert_row(&mut self, label: &str, cells: &[(NaiveDate, Option<f64>)]) {
        for (period_end, value) in cells {
            self.periods.insert(*period_end);
            if let Some(v) = value {
                self.insert(label, *period_end, *v);
            }
        }
    }

    /// Drop a row by its exact label, returning its cells.
    pub fn remove_row(&mut self, label: &str) -> Option<BTreeMap<NaiveDate, f64>> {
        self.rows.remove(label)
    }

    /// Whether the table has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fiscal period ends, oldest first.
    pub fn periods(&self) -> Vec<NaiveDate> {
        self.periods.iter().copied().collect()
    }

    /// The `n` most recent period ends, newest first.
    pub fn recent_periods(&self, n: usize) -> Vec<NaiveDate> {
        self.periods.iter().rev().take(n).copied().collect()
    }

    /// Most recent fiscal period end.
    pub fn latest_period(&self) -> Option<NaiveDate> {
        self.periods.last().copied()
    }

    /// Row labels as reported.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Cells of a row by its exact label.
    pub fn row(&self, label: &str) -> Option<&BTreeMap<NaiveDate, f64>> {
        self.rows.get(label)
    }

    /// Resolve a line item to the first candidate label present.
    pub fn resolve(&self, item: LineItem) -> Option<(&str, &BTreeMap<NaiveDate, f64>)> {
        item.candidates().iter().find_map(|candidate| {
            let wanted = normalize_label(candidate);
            self.rows
                .iter()
                .find(|(label, _)| normalize_label(label) == wanted)
                .map(|(label, cells)| (label.as_str(), cells))
        })
    }

    /// Value of a line item at a period, if reported.
    pub fn value(&self, item: LineItem, period_end: NaiveDate) -> Option<f64> {
        self.resolve(item)
            .and_then(|(_, cells)| cells.get(&period_end).copied())
    }

    /// Trailing-twelve-month sum of a line item.
    ///
    /// Defined only when the table holds at least four periods and the item
    /// is reported in every one of the four most recent.
    pub fn ttm_sum(&self, item: LineItem) -> Option<f64> {
        let recent = self.recent_periods(TTM_QUARTERS);
        if recent.len() < TTM_QUARTERS {
            return None;
        }
        let (_, cells) = self.resolve(item)?;
        recent
            .iter()
            .map(|p| cells.get(p).copied())
            .sum::<Option<f64>>()
    }

    /// Most-recent-quarter value of a line item.
    pub fn mrq_value(&self, item: LineItem) -> Option<f64> {
        self.value(item, self.latest_period()?)
    }

    /// Value of a line item for the quarter one year before the latest.
    pub fn same_quarter_last_year(&self, item: LineItem) -> Option<f64> {
        let period = *self.recent_periods(TTM_QUARTERS + 1).get(TTM_QUARTERS)?;
        self.value(item, period)
    }

    /// A read-only view of one quarter; `0` is the most recent.
    pub fn quarter(&self, index: usize) -> Option<QuarterlyStatement<'_>> {
        let period_end = self.periods.iter().rev().nth(index).copied()?;
        Some(QuarterlyStatement {
            table: self,
            period_end,
        })
    }
}

/// One fiscal quarter's reported line items.
#[derive(Debug, Clone, Copy)]
pub struct QuarterlyStatement<'a> {
    table: &'a StatementTable,
    period_end: NaiveDate,
}

impl<'a> QuarterlyStatement<'a> {
    /// Fiscal period end date.
    pub const fn period_end(&self) -> NaiveDate {
        self.period_end
    }

    /// Statement kind.
    pub const fn kind(&self) -> StatementKind {
        self.table.kind
    }

    /// Value of a line item in this quarter.
    pub fn get(&self, item: LineItem) -> Option<f64> {
        self.table.value(item, self.period_end)
    }

    /// All reported cells for this quarter, by label.
    pub fn items(&self) -> Vec<(&'a str, f64)> {
        self.table
            .rows
            .iter()
            .filter_map(|(label, cells)| {
                cells
                    .get(&self.period_end)
                    .map(|v| (label.as_str(), *v))
            })
            .collect()
    }
}
