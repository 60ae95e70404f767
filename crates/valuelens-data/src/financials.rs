//! The fetched bundle for one ticker.

use crate::error::Result;
use crate::statement::{LineItem, StatementKind, StatementTable};
use crate::ticker::Ticker;
use chrono::{NaiveDate, NaiveTime};
use polars::prelude::*;

/// Quarterly income, balance sheet and cash flow tables plus market cap.
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterlyFinancials {
    /// Symbol the statements belong to
    pub ticker: Ticker,
    /// Quarterly income statement
    pub income: StatementTable,
    /// Quarterly balance sheet
    pub balance_sheet: StatementTable,
    /// Quarterly cash flow statement
    pub cash_flow: StatementTable,
    /// Market capitalisation at fetch time
    pub market_cap: Option<f64>,
}

impl QuarterlyFinancials {
    /// Create an empty bundle.
    pub const fn new(ticker: Ticker) -> Self {
        Self {
            ticker,
            income: StatementTable::new(StatementKind::Income),
            balance_sheet: StatementTable::new(StatementKind::BalanceSheet),
            cash_flow: StatementTable::new(StatementKind::CashFlow),
            market_cap: None,
        }
    }

    /// Set the market capitalisation.
    pub const fn with_market_cap(mut self, market_cap: Option<f64>) -> Self {
        self.market_cap = market_cap;
        self
    }

    /// Table for a statement kind.
    pub const fn statement(&self, kind: StatementKind) -> &StatementTable {
        match kind {
            StatementKind::Income => &self.income,
            StatementKind::BalanceSheet => &self.balance_sheet,
            StatementKind::CashFlow => &self.cash_flow,
        }
    }

    /// Mutable table for a statement kind.
    pub const fn statement_mut(&mut self, kind: StatementKind) -> &mut StatementTable {
        match kind {
            StatementKind::Income => &mut self.income,
            StatementKind::BalanceSheet => &mut self.balance_sheet,
            StatementKind::CashFlow => &mut self.cash_flow,
        }
    }

    /// Trailing-twelve-month sum of a flow item.
    pub fn ttm(&self, item: LineItem) -> Option<f64> {
        self.statement(item.statement()).ttm_sum(item)
    }

    /// Most-recent-quarter value of an item.
    pub fn mrq(&self, item: LineItem) -> Option<f64> {
        self.statement(item.statement()).mrq_value(item)
    }

    /// Value of an item in the same quarter one year earlier.
    pub fn year_ago(&self, item: LineItem) -> Option<f64> {
        self.statement(item.statement()).same_quarter_last_year(item)
    }

    /// Whether no statement holds any data.
    pub fn is_empty(&self) -> bool {
        StatementKind::ALL
            .iter()
            .all(|kind| self.statement(*kind).is_empty())
    }

    /// Latest fiscal period across all statements.
    pub fn latest_period(&self) -> Option<NaiveDate> {
        StatementKind::ALL
            .iter()
            .filter_map(|kind| self.statement(*kind).latest_period())
            .max()
    }

    /// Convert one statement to a Polars DataFrame.
    ///
    /// Columns: `period_end` (Date, oldest first) followed by one nullable
    /// Float64 column per reported label.
    pub fn to_dataframe(&self, kind: StatementKind) -> Result<DataFrame> {
        let table = self.statement(kind);
        let periods = table.periods();

        let timestamps: Vec<i64> = periods
            .iter()
            .map(|d| d.and_time(NaiveTime::MIN).and_utc().timestamp())
            .collect();

        let mut columns: Vec<Column> = vec![Series::new("period_end".into(), timestamps).into()];
        for label in table.labels() {
            let values: Vec<Option<f64>> = table
                .row(label)
                .map(|cells| periods.iter().map(|p| cells.get(p).copied()).collect())
                .unwrap_or_default();
            columns.push(Series::new(label.into(), values).into());
        }

        let df = DataFrame::new(columns)?
            .lazy()
            .with_column(
                (col("period_end") * lit(1_000_000_000))
                    .cast(DataType::Datetime(TimeUnit::Nanoseconds, None))
                    .cast(DataType::Date)
                    .alias("period_end"),
            )
            .collect()?;

        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_financials;

    #[test]
    fn test_item_routing() {
        let fin = sample_financials(Ticker::parse("AAPL").unwrap());
        assert!(fin.ttm(LineItem::Revenue).is_some());
        assert!(fin.mrq(LineItem::Equity).is_some());
        assert!(fin.year_ago(LineItem::NetIncome).is_some());
        assert!(fin.market_cap.is_some());
    }

    #[test]
    fn test_empty_bundle() {
        let fin = QuarterlyFinancials::new(Ticker::parse("ZZZZ").unwrap());
        assert!(fin.is_empty());
        assert!(fin.latest_period().is_none());
        assert!(fin.ttm(LineItem::Revenue).is_none());
    }

    #[test]
    fn test_to_dataframe() {
        let fin = sample_financials(Ticker::parse("AAPL").unwrap());
        let df = fin.to_dataframe(StatementKind::Income).unwrap();

        assert_eq!(df.height(), fin.income.periods().len());
        assert_eq!(df.width(), fin.income.labels().count() + 1);
        assert_eq!(
            df.column("period_end").unwrap().dtype(),
            &DataType::Date
        );
        assert!(df.column("Total Revenue").is_ok());
    }
}
