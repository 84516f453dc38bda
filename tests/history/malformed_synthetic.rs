use httpmock::{Method::GET, MockServer};

use alphavantage_rs::{AvError, Ticker};

#[tokio::test]
async fn daily_bar_with_fewer_than_eight_fields_is_malformed() {
    let server = MockServer::start();

    // "8. split coefficient" is absent; the bar must fail, not shrink.
    let body = r#"{
      "Meta Data": { "2. Symbol": "MSFT" },
      "Time Series (Daily)": {
        "2024-01-02": {
          "1. open": "370.0",
          "2. high": "375.9",
          "3. low": "366.5",
          "4. close": "374.58",
          "5. adjusted close": "373.08",
          "6. volume": "25258600",
          "7. dividend amount": "0.0000"
        }
      }
    }"#;

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY_ADJUSTED");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = crate::common::mock_client(&server);
    let err = Ticker::new(&client, "MSFT").daily().await.unwrap_err();

    mock.assert();
    assert!(matches!(err, AvError::Data(_)), "expected Data error, got {err:?}");
    assert!(err.to_string().contains("split coefficient"));
}

#[tokio::test]
async fn non_numeric_field_is_malformed() {
    let server = MockServer::start();

    let body = r#"{
      "Time Series (Daily)": {
        "2024-01-02": {
          "1. open": "not-a-price",
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

    server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY_ADJUSTED");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = crate::common::mock_client(&server);
    let err = Ticker::new(&client, "MSFT").daily().await.unwrap_err();

    assert!(matches!(err, AvError::Data(_)), "expected Data error, got {err:?}");
}

#[tokio::test]
async fn body_without_a_time_series_is_malformed() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY_ADJUSTED");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{ "Meta Data": { "2. Symbol": "MSFT" } }"#);
    });

    let client = crate::common::mock_client(&server);
    let err = Ticker::new(&client, "MSFT").daily().await.unwrap_err();

    assert!(matches!(err, AvError::Data(_)), "expected Data error, got {err:?}");
}
