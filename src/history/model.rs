use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{Cell, Table};

/// One trading day of the adjusted daily series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adjusted_close: f64,
    pub volume: u64,
    pub dividend_amount: f64,
    pub split_coefficient: f64,
}

/// Metadata the provider echoes back alongside the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMeta {
    pub symbol: Option<String>,
    pub last_refreshed: Option<String>,
    pub time_zone: Option<String>,
}

/// Full-history adjusted daily series for one symbol, ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    pub symbol: String,
    pub meta: Option<DailyMeta>,
    pub bars: Vec<DailyBar>,
}

/// Column names of the persisted historical table, in order. The trading day
/// (the response's map key) becomes the explicit first column.
pub(crate) const DAILY_COLUMNS: [&str; 9] = [
    "date",
    "open",
    "high",
    "low",
    "close",
    "adjusted_close",
    "volume",
    "dividend_amount",
    "split_coefficient",
];

impl DailySeries {
    /// Reshape into the fixed nine-column table written to the warehouse.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(DAILY_COLUMNS.iter().map(|c| (*c).to_string()).collect());
        for bar in &self.bars {
            table.push_row(vec![
                Cell::Date(bar.date),
                Cell::Float(bar.open),
                Cell::Float(bar.high),
                Cell::Float(bar.low),
                Cell::Float(bar.close),
                Cell::Float(bar.adjusted_close),
                Cell::Int(bar.volume as i64),
                Cell::Float(bar.dividend_amount),
                Cell::Float(bar.split_coefficient),
            ]);
        }
        table
    }
}
