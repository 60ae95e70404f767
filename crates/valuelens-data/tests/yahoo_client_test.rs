//! HTTP-level tests for the fundamentals time-series client.

use std::time::Duration;
use tokio::time::Instant;
use valuelens_data::yahoo::YahooFundamentalsClient;
use valuelens_data::{
    DataError, FinancialsSource, LineItem, ProviderConfig, Ticker, YahooFinancialsSource,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMESERIES: &str = "/ws/fundamentals-timeseries/v1/finance/timeseries/AAPL";

fn point(date: &str, raw: f64) -> serde_json::Value {
    serde_json::json!({"asOfDate": date, "periodType": "3M", "reportedValue": {"raw": raw}})
}

fn series(kind: &str, points: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "meta": {"symbol": ["AAPL"], "type": [kind]},
        kind: points,
    })
}

fn four_quarters(kind: &str, values: [f64; 4]) -> serde_json::Value {
    let dates = ["2023-09-30", "2023-12-31", "2024-03-31", "2024-06-30"];
    series(
        kind,
        dates.iter().zip(values).map(|(d, v)| point(d, v)).collect(),
    )
}

fn full_body() -> serde_json::Value {
    serde_json::json!({
        "timeseries": {
            "result": [
                four_quarters("quarterlyTotalRevenue", [89.5e9, 119.58e9, 90.75e9, 85.78e9]),
                four_quarters("quarterlyOperatingIncome", [26.97e9, 40.37e9, 27.9e9, 25.35e9]),
                four_quarters("quarterlyDepreciationAndAmortization", [2.65e9, 2.85e9, 2.84e9, 2.85e9]),
                four_quarters("quarterlyOperatingCashFlow", [21.6e9, 39.9e9, 22.69e9, 28.86e9]),
                four_quarters("quarterlyCapitalExpenditure", [-2.16e9, -2.39e9, -1.99e9, -2.15e9]),
                series("quarterlyTotalDebt", vec![point("2024-06-30", 101.3e9)]),
                series("quarterlyStockholdersEquity", vec![point("2024-06-30", 66.71e9)]),
                series("trailingMarketCap", vec![point("2024-07-01", 3.2e12)]),
            ],
            "error": null
        }
    })
}

async fn client_for(server: &MockServer) -> YahooFundamentalsClient {
    let config = ProviderConfig::default()
        .with_base_url(server.uri())
        .with_request_interval(Duration::from_millis(1));
    YahooFundamentalsClient::with_config(&config).unwrap()
}

#[tokio::test]
async fn test_fetch_statements_builds_tables() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TIMESERIES))
        .and(query_param("symbol", "AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let fin = client
        .fetch_statements(&Ticker::parse("aapl").unwrap())
        .await
        .unwrap();

    let revenue = fin.ttm(LineItem::Revenue).unwrap();
    assert!((revenue - 385.61e9).abs() < 1.0);
    assert_eq!(fin.mrq(LineItem::TotalDebt), Some(101.3e9));
    assert_eq!(fin.market_cap, Some(3.2e12));
    assert!(fin.ttm(LineItem::NetIncome).is_none());
}

#[tokio::test]
async fn test_empty_result_is_missing_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TIMESERIES))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"timeseries": {"result": [], "error": null}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .fetch_statements(&Ticker::parse("AAPL").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, DataError::MissingData { .. }));
    assert!(err.is_retryable());
    assert!(err.to_string().contains("retry"));
}

#[tokio::test]
async fn test_throttling_maps_to_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TIMESERIES))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "3"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .fetch_statements(&Ticker::parse("AAPL").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, DataError::RateLimit { retry_after_ms: 3000 }));
}

#[tokio::test]
async fn test_server_error_maps_to_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TIMESERIES))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .fetch_statements(&Ticker::parse("AAPL").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, DataError::Http(_)));
}

#[tokio::test]
async fn test_provider_error_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TIMESERIES))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "timeseries": {"result": [], "error": {"code": "Bad Request", "description": "Invalid symbol"}}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .fetch_statements(&Ticker::parse("AAPL").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, DataError::YahooApi(_)));
}

#[tokio::test]
async fn test_rate_limiting() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TIMESERIES))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_body()))
        .expect(3)
        .mount(&server)
        .await;

    let config = ProviderConfig::default()
        .with_base_url(server.uri())
        .with_request_interval(Duration::from_millis(150));
    let client = YahooFundamentalsClient::with_config(&config).unwrap();
    let ticker = Ticker::parse("AAPL").unwrap();

    let start = Instant::now();
    for _ in 0..3 {
        client.fetch_statements(&ticker).await.unwrap();
    }

    // 2 intervals between 3 requests
    assert!(start.elapsed() >= Duration::from_millis(300));
}

#[tokio::test]
async fn test_source_without_quotes_uses_trailing_market_cap() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TIMESERIES))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_body()))
        .mount(&server)
        .await;

    let config = ProviderConfig::default().with_base_url(server.uri());
    let source = YahooFinancialsSource::without_quotes(&config).unwrap();
    let fin = source
        .fetch_quarterly(&Ticker::parse("AAPL").unwrap())
        .await
        .unwrap();

    assert_eq!(source.name(), "yahoo");
    assert_eq!(fin.market_cap, Some(3.2e12));
}
