use httpmock::MockServer;
use url::Url;

use alphavantage_rs::AvClient;

/// A client pointed at a mock server's `/query` endpoint.
pub fn mock_client(server: &MockServer) -> AvClient {
    AvClient::builder()
        .api_key("test-key")
        .base_query(Url::parse(&format!("{}/query", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// Two-day synthetic `TIME_SERIES_DAILY_ADJUSTED` payload for MSFT. The days
/// appear newest-first, the way the provider ships them.
pub const DAILY_BODY: &str = r#"{
  "Meta Data": {
    "1. Information": "Daily Time Series with Splits and Dividend Events",
    "2. Symbol": "MSFT",
    "3. Last Refreshed": "2024-01-03",
    "4. Output Size": "Full size",
    "5. Time Zone": "US/Eastern"
  },
  "Time Series (Daily)": {
    "2024-01-03": {
      "1. open": "372.5",
      "2. high": "373.26",
      "3. low": "368.68",
      "4. close": "370.6",
      "5. adjusted close": "369.12",
      "6. volume": "21236000",
      "7. dividend amount": "0.0000",
      "8. split coefficient": "1.0"
    },
    "2024-01-02": {
      "1. open": "370.0",
      "2. high": "375.9",
      "3. low": "366.5",
      "4. close": "374.58",
      "5. adjusted close": "373.08",
      "6. volume": "25258600",
      "7. dividend amount": "0.0000",
      "8. split coefficient": "1.0"
    }
  }
}"#;

pub const OVERVIEW_BODY: &str = r#"{
  "Symbol": "MSFT",
  "AssetType": "Common Stock",
  "Name": "Microsoft Corporation",
  "Exchange": "NASDAQ",
  "Currency": "USD",
  "Sector": "TECHNOLOGY",
  "MarketCapitalization": "2816000000000",
  "PERatio": "35.8",
  "DividendYield": "0.0078"
}"#;

/// Four quarters of a synthetic balance sheet, newest first.
pub const BALANCE_SHEET_BODY: &str = r#"{
  "symbol": "MSFT",
  "annualReports": [],
  "quarterlyReports": [
    { "fiscalDateEnding": "2023-12-31", "reportedCurrency": "USD", "totalAssets": "470558000000", "totalLiabilities": "225071000000" },
    { "fiscalDateEnding": "2023-09-30", "reportedCurrency": "USD", "totalAssets": "445785000000", "totalLiabilities": "225000000000" },
    { "fiscalDateEnding": "2023-06-30", "reportedCurrency": "USD", "totalAssets": "411976000000", "totalLiabilities": "205753000000" },
    { "fiscalDateEnding": "2023-03-31", "reportedCurrency": "USD", "totalAssets": "380088000000", "totalLiabilities": "None" }
  ]
}"#;

pub const INCOME_STATEMENT_BODY: &str = r#"{
  "symbol": "MSFT",
  "annualReports": [],
  "quarterlyReports": [
    { "fiscalDateEnding": "2023-12-31", "reportedCurrency": "USD", "totalRevenue": "62020000000", "netIncome": "21870000000" },
    { "fiscalDateEnding": "2023-09-30", "reportedCurrency": "USD", "totalRevenue": "56517000000", "netIncome": "22291000000" }
  ]
}"#;

pub const CASH_FLOW_BODY: &str = r#"{
  "symbol": "MSFT",
  "annualReports": [],
  "quarterlyReports": [
    { "fiscalDateEnding": "2023-12-31", "reportedCurrency": "USD", "operatingCashflow": "18853000000", "capitalExpenditures": "9735000000" },
    { "fiscalDateEnding": "2023-09-30", "reportedCurrency": "USD", "operatingCashflow": "30583000000", "capitalExpenditures": "9917000000" }
  ]
}"#;
