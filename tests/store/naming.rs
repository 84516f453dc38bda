use alphavantage_rs::Dataset;

#[test]
fn every_dataset_gets_its_own_table_per_ticker() {
    let msft: Vec<String> = Dataset::ALL.iter().map(|d| d.table_name("MSFT")).collect();
    assert_eq!(
        msft,
        vec![
            "msft_historical",
            "msft_overview",
            "msft_balance_sheet",
            "msft_income_statement",
            "msft_cash_flow"
        ]
    );

    // a second ticker never lands on the same tables
    let aapl: Vec<String> = Dataset::ALL.iter().map(|d| d.table_name("AAPL")).collect();
    assert!(msft.iter().all(|name| !aapl.contains(name)));
}
