use crate::core::{AvClient, AvError, Table};
use crate::fundamentals::{self, Fundamentals};
use crate::history::{self, DailySeries};
use crate::store::{Dataset, Store};

/// A high-level interface for a single ticker symbol.
///
/// A `Ticker` is created with an [`AvClient`] and a symbol. It then provides
/// methods to fetch the adjusted daily history and the fundamentals datasets,
/// and to [`sync`](Ticker::sync) everything into the warehouse in one call.
///
/// # Example
///
/// ```no_run
/// # use alphavantage_rs::{AvClient, Ticker};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AvClient::builder().api_key("demo").build()?;
/// let ticker = Ticker::new(&client, "MSFT");
///
/// let series = ticker.daily().await?;
/// println!("{} trading days", series.bars.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    client: AvClient,
    symbol: String,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    ///
    /// The symbol is taken as-is; it is not validated against any exchange.
    pub fn new(client: &AvClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fetches the full adjusted daily history, ascending by date.
    ///
    /// # Errors
    ///
    /// Any transport, provider or data-shape failure is surfaced unrecovered.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn daily(&self) -> Result<DailySeries, AvError> {
        history::daily_adjusted(&self.client, &self.symbol).await
    }

    /// Fetches the company overview as a one-row table.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn overview(&self) -> Result<Table, AvError> {
        fundamentals::overview(&self.client, &self.symbol).await
    }

    /// Fetches the quarterly balance sheet, one row per quarter.
    pub async fn quarterly_balance_sheet(&self) -> Result<Table, AvError> {
        fundamentals::balance_sheet(&self.client, &self.symbol, true).await
    }

    /// Fetches the quarterly income statement, one row per quarter.
    pub async fn quarterly_income_statement(&self) -> Result<Table, AvError> {
        fundamentals::income_statement(&self.client, &self.symbol, true).await
    }

    /// Fetches the quarterly cash flow statement, one row per quarter.
    pub async fn quarterly_cash_flow(&self) -> Result<Table, AvError> {
        fundamentals::cash_flow(&self.client, &self.symbol, true).await
    }

    /// Fetches all four fundamentals datasets sequentially.
    ///
    /// # Errors
    ///
    /// The first failing call aborts the whole fetch; there is no partial
    /// result.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fundamentals(&self) -> Result<Fundamentals, AvError> {
        fundamentals::fetch_all(&self.client, &self.symbol).await
    }

    /// Fetch everything for this symbol, then replace its five destination
    /// tables.
    ///
    /// All fetching happens before the first write, so a provider failure
    /// writes nothing at all. The write order is fixed (historical, overview,
    /// balance sheet, income statement, cash flow) and the five writes are
    /// not wrapped in a shared transaction: a write failure partway leaves the
    /// tables earlier in the order already replaced. Each individual table is
    /// still replaced transactionally.
    ///
    /// # Errors
    ///
    /// Fetch errors and database errors are surfaced unrecovered.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, store), err, fields(symbol = %self.symbol)))]
    pub async fn sync(&self, store: &Store) -> Result<SyncReport, AvError> {
        let daily = self.daily().await?;
        let fundamentals = self.fundamentals().await?;

        let historical = daily.to_table();
        let tables: [(Dataset, &Table); 5] = [
            (Dataset::Historical, &historical),
            (Dataset::Overview, &fundamentals.overview),
            (Dataset::BalanceSheet, &fundamentals.balance_sheet),
            (Dataset::IncomeStatement, &fundamentals.income_statement),
            (Dataset::CashFlow, &fundamentals.cash_flow),
        ];

        let mut report = SyncReport {
            tables: Vec::with_capacity(tables.len()),
        };
        for (dataset, table) in tables {
            let name = dataset.table_name(&self.symbol);
            store.replace(&name, table).await?;
            report.tables.push(SyncedTable {
                dataset,
                table: name,
                rows: table.len(),
            });
        }

        Ok(report)
    }
}

/// What [`Ticker::sync`] wrote, in write order.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub tables: Vec<SyncedTable>,
}

/// One replaced destination table.
#[derive(Debug, Clone)]
pub struct SyncedTable {
    pub dataset: Dataset,
    /// The derived destination table name, e.g. `msft_balance_sheet`.
    pub table: String,
    pub rows: usize,
}
