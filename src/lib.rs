//! alphavantage-rs: ergonomic Alpha Vantage client with a Postgres warehouse sync.
//!
//! Fetch the full adjusted daily price history and the company fundamentals
//! (overview, balance sheet, income statement, cash flow) for a ticker,
//! reshape them into column-ordered tables, and replace the per-ticker
//! destination tables in a single call.
//!
//! ```no_run
//! # use alphavantage_rs::{AvClient, Store, Ticker};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AvClient::builder().api_key("demo").build()?;
//! let store = Store::connect("postgres://localhost/market").await?;
//!
//! let report = Ticker::new(&client, "MSFT").sync(&store).await?;
//! for table in &report.tables {
//!     println!("{}: {} rows", table.table, table.rows);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod fundamentals;
pub mod history;
pub mod store;
pub mod ticker;

pub use crate::core::{AvClient, AvClientBuilder, AvError, Cell, Table};
pub use fundamentals::Fundamentals;
pub use history::{DailyBar, DailyMeta, DailySeries};
pub use store::{Dataset, Store};
pub use ticker::{SyncReport, SyncedTable, Ticker};
