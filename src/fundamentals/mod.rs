//! Company fundamentals: overview plus the three financial statements.

mod api;
mod model;
mod wire;

pub use model::Fundamentals;

use crate::core::{AvClient, AvError, Table};

/// Fetch the company overview (`OVERVIEW`) as a one-row table whose columns
/// are the provider's own field names, in response order.
pub async fn overview(client: &AvClient, symbol: &str) -> Result<Table, AvError> {
    api::overview(client, symbol).await
}

/// Fetch the balance sheet (`BALANCE_SHEET`), one row per reporting period.
pub async fn balance_sheet(
    client: &AvClient,
    symbol: &str,
    quarterly: bool,
) -> Result<Table, AvError> {
    api::statement(client, symbol, "BALANCE_SHEET", quarterly).await
}

/// Fetch the income statement (`INCOME_STATEMENT`), one row per reporting period.
pub async fn income_statement(
    client: &AvClient,
    symbol: &str,
    quarterly: bool,
) -> Result<Table, AvError> {
    api::statement(client, symbol, "INCOME_STATEMENT", quarterly).await
}

/// Fetch the cash flow statement (`CASH_FLOW`), one row per reporting period.
pub async fn cash_flow(
    client: &AvClient,
    symbol: &str,
    quarterly: bool,
) -> Result<Table, AvError> {
    api::statement(client, symbol, "CASH_FLOW", quarterly).await
}

/// Fetch all four datasets sequentially, quarterly statements throughout.
///
/// The order is fixed: overview, balance sheet, income statement, cash flow.
/// The first failure aborts the whole fetch; there is no partial result.
pub async fn fetch_all(client: &AvClient, symbol: &str) -> Result<Fundamentals, AvError> {
    api::fetch_all(client, symbol).await
}
