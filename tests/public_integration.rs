use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bitstamp_api_client::error::{BitstampError, ErrorBody, ErrorKind};
use bitstamp_api_client::rest::BitstampRestClient;
use bitstamp_api_client::rest::public::{OrderBookRequest, TransactionsRequest, TransactionsTime};

fn build_public_client(server: &MockServer) -> BitstampRestClient {
    BitstampRestClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_ticker_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/ticker/btcusd/"))
        .and(query_param_is_missing("time"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"price":"100"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let ticker = client.ticker("btcusd").await.unwrap();
    assert_eq!(ticker, serde_json::json!({"price": "100"}));
}

#[tokio::test]
async fn test_user_agent_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/ticker_hour/btceur/"))
        .and(header(
            "user-agent",
            concat!("bitstamp-api-client/", env!("CARGO_PKG_VERSION")),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"last": "1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let ticker = client.ticker_hour("btceur").await.unwrap();
    assert_eq!(ticker["last"], "1");
}

#[tokio::test]
async fn test_custom_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "my-bot/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = BitstampRestClient::builder()
        .base_url(server.uri())
        .user_agent("my-bot/1.0")
        .build()
        .unwrap();
    client.ticker("btcusd").await.unwrap();
}

#[tokio::test]
async fn test_transactions_with_time() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {"date": "1700000000", "tid": "1", "price": "50000", "amount": "0.1", "type": "0"}
    ]);

    Mock::given(method("GET"))
        .and(path("/api/v2/transactions/btceur/"))
        .and(query_param("time", "minute"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let request = TransactionsRequest::new(TransactionsTime::Minute);
    let trades = client.transactions("btceur", Some(&request)).await.unwrap();
    assert_eq!(trades[0]["price"], "50000");
}

#[tokio::test]
async fn test_order_book_group() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/order_book/btcusd/"))
        .and(query_param("group", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"bids": [["100", "1"]], "asks": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let book = client
        .order_book("btcusd", Some(&OrderBookRequest::grouped(1)))
        .await
        .unwrap();
    assert_eq!(book["bids"][0][0], "100");
}

#[tokio::test]
async fn test_eur_usd_uses_legacy_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/eur_usd/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"sell": "1.08", "buy": "1.09"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let rate = client.eur_usd().await.unwrap();
    assert_eq!(rate["sell"], "1.08");
}

#[tokio::test]
async fn test_http_400_with_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/ticker/nope/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"status": "error", "reason": "Invalid market"})),
        )
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let error = client.ticker("nope").await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::HttpStatus);
    assert_eq!(error.http_status(), Some(400));
    assert_eq!(error.body_json().unwrap()["reason"], "Invalid market");
}

#[tokio::test]
async fn test_http_error_with_text_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    match client.ticker("btcusd").await {
        Err(BitstampError::HttpStatus { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, ErrorBody::Text("Service Unavailable".to_string()));
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_200_with_invalid_json_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not-json"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let error = client.ticker("btcusd").await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ResponseParse);
    assert_eq!(error.raw_body().as_deref(), Some("not-json"));
}

#[tokio::test]
async fn test_idle_timeout_aborts_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"price":"100"}"#)
                .set_delay(Duration::from_millis(1500)),
        )
        .mount(&server)
        .await;

    let client = BitstampRestClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let error = client.ticker("btcusd").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Timeout);
    assert!(error.http_status().is_none());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop a listener to get a local port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let client = BitstampRestClient::builder()
        .base_url(format!("http://127.0.0.1:{port}"))
        .build()
        .unwrap();

    let error = client.ticker("btcusd").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Transport);
}
