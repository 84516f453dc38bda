use httpmock::{Method::GET, MockServer};

use alphavantage_rs::{AvError, Ticker};

#[tokio::test]
async fn fundamentals_abort_on_the_first_failing_call() {
    let server = MockServer::start();

    let overview = server.mock(|when, then| {
        when.method(GET).path("/query").query_param("function", "OVERVIEW");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::OVERVIEW_BODY);
    });
    let balance_sheet = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "BALANCE_SHEET");
        then.status(500).body("boom");
    });
    let income_statement = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "INCOME_STATEMENT");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::INCOME_STATEMENT_BODY);
    });
    let cash_flow = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "CASH_FLOW");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::CASH_FLOW_BODY);
    });

    let client = crate::common::mock_client(&server);
    let err = Ticker::new(&client, "MSFT").fundamentals().await.unwrap_err();

    assert!(
        matches!(err, AvError::Status { status: 500, .. }),
        "expected Status 500, got {err:?}"
    );

    // The fetch order is overview → balance sheet → income statement → cash
    // flow, and the failure stops the sequence dead.
    overview.assert();
    balance_sheet.assert();
    income_statement.assert_hits(0);
    cash_flow.assert_hits(0);
}
