use chrono::NaiveDate;
use httpmock::prelude::*;
use pegscan_alphavantage::AvClient;
use pegscan_core::{EarningsDataSource, PegscanError};
use serde_json::json;
use url::Url;

fn client_for(server: &MockServer) -> AvClient {
    AvClient::builder("test-key")
        .base_url(Url::parse(&server.url("/query")).unwrap())
        .build()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn parses_and_sorts_quarterly_report_dates() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/query")
                .query_param("function", "EARNINGS")
                .query_param("symbol", "AAPL")
                .query_param("apikey", "test-key");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "symbol": "AAPL",
                    "quarterlyEarnings": [
                        {
                            "fiscalDateEnding": "2023-12-31",
                            "reportedDate": "2024-02-01",
                            "reportedEPS": "2.18",
                            "estimatedEPS": "2.10"
                        },
                        {
                            "fiscalDateEnding": "2023-09-30",
                            "reportedDate": "2023-11-02",
                            "reportedEPS": "1.46",
                            "estimatedEPS": "1.39"
                        }
                    ]
                }));
        })
        .await;

    let reports = client_for(&server).quarterly_earnings("AAPL").await.unwrap();
    mock.assert_async().await;

    // Upstream lists newest-first; the client hands back ascending order.
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].reported, day(2023, 11, 2));
    assert_eq!(reports[1].reported, day(2024, 2, 1));
    assert!(reports.iter().all(|r| r.symbol == "AAPL"));
}

#[tokio::test]
async fn empty_quarter_list_is_fine() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/query");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "symbol": "IPO", "quarterlyEarnings": [] }));
        })
        .await;

    let reports = client_for(&server).quarterly_earnings("IPO").await.unwrap();
    assert!(reports.is_empty());
}

#[tokio::test]
async fn missing_quarterly_section_on_2xx_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/query");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "symbol": "AAPL" }));
        })
        .await;

    let err = client_for(&server)
        .quarterly_earnings("AAPL")
        .await
        .unwrap_err();
    assert!(matches!(err, PegscanError::MalformedResponse(_)), "got {err}");
}

#[tokio::test]
async fn unparseable_report_date_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/query");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "quarterlyEarnings": [
                        { "reportedDate": "02/01/2024" }
                    ]
                }));
        })
        .await;

    let err = client_for(&server)
        .quarterly_earnings("AAPL")
        .await
        .unwrap_err();
    assert!(matches!(err, PegscanError::MalformedResponse(_)), "got {err}");
}

#[tokio::test]
async fn in_band_error_message_maps_to_upstream() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/query");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "Error Message": "Invalid API call." }));
        })
        .await;

    let err = client_for(&server)
        .quarterly_earnings("NOSUCH")
        .await
        .unwrap_err();
    assert!(matches!(err, PegscanError::Upstream(_)), "got {err}");
}
