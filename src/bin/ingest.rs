//! Minimal ingestion entry point.
//!
//! Fetches everything for one ticker (default `MSFT`, override with the first
//! argument) using an API key from `AV_API_KEY`. The warehouse sync only runs
//! when `DATABASE_URL` is set; without it the run just fetches and reports.

use std::env;

use alphavantage_rs::{AvClient, Store, Ticker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt::init();

    let api_key =
        env::var("AV_API_KEY").map_err(|_| "set AV_API_KEY to an Alpha Vantage API key")?;
    let symbol = env::args().nth(1).unwrap_or_else(|| "MSFT".to_owned());

    let client = AvClient::builder().api_key(api_key).build()?;
    let ticker = Ticker::new(&client, &symbol);

    match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let store = Store::connect(&database_url).await?;
            let report = ticker.sync(&store).await?;
            for table in &report.tables {
                println!("replaced {:<32} {:>7} rows", table.table, table.rows);
            }
        }
        Err(_) => {
            let series = ticker.daily().await?;
            println!("{}: {} trading days", ticker.symbol(), series.bars.len());

            let fundamentals = ticker.fundamentals().await?;
            println!(
                "overview: {} fields",
                fundamentals.overview.columns().len()
            );
            println!("balance sheet: {} quarters", fundamentals.balance_sheet.len());
            println!(
                "income statement: {} quarters",
                fundamentals.income_statement.len()
            );
            println!("cash flow: {} quarters", fundamentals.cash_flow.len());
        }
    }

    Ok(())
}
