use httpmock::{Method::GET, MockServer};

use alphavantage_rs::{AvError, Ticker};

#[tokio::test]
async fn provider_error_message_maps_to_provider_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY_ADJUSTED");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{ "Error Message": "Invalid API call. Please retry or visit the documentation." }"#);
    });

    let client = crate::common::mock_client(&server);
    let err = Ticker::new(&client, "NOPE").daily().await.unwrap_err();

    assert!(
        matches!(err, AvError::Provider(_)),
        "expected Provider error, got {err:?}"
    );
}

#[tokio::test]
async fn throttle_note_maps_to_rate_limited() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY_ADJUSTED");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{ "Note": "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day." }"#);
    });

    let client = crate::common::mock_client(&server);
    let err = Ticker::new(&client, "MSFT").daily().await.unwrap_err();

    assert!(
        matches!(err, AvError::RateLimited(_)),
        "expected RateLimited error, got {err:?}"
    );
}

#[tokio::test]
async fn http_error_status_is_surfaced() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY_ADJUSTED");
        then.status(500).body("upstream exploded");
    });

    let client = crate::common::mock_client(&server);
    let err = Ticker::new(&client, "MSFT").daily().await.unwrap_err();

    match err {
        AvError::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Status error, got {other:?}"),
    }
}
