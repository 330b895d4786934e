//! Request executor behaviour against a mock Livecoin server

mod common;

use common::{authed_client, client_with, public_client, setup_mock_server, EMPTY_BODY_SIGN, TEST_KEY};
use livecoin_rest::{ClientConfig, Credentials, LivecoinClient, RestError};
use reqwest::{Method, StatusCode};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_test::assert_ok;
use wiremock::matchers::{any, body_string, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_sends_params_in_query_without_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/payment/balance"))
        .and(query_param("currency", "BTC"))
        .and(header("Accept", "application/json"))
        .and(header("Api-key", TEST_KEY))
        .and(header("Sign", EMPTY_BODY_SIGN))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "total", "currency": "BTC", "value": 1.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server);
    let raw = assert_ok!(
        client
            .executor()
            .execute(Method::GET, "payment/balance", &[("currency", "BTC")], true)
            .await
    );
    assert_eq!(raw.status, StatusCode::OK);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_post_sends_form_body_and_leaves_query_untouched() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/exchange/cancellimit"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(header("Accept", "application/json"))
        .and(header(
            "Sign",
            "97DDAA0ABA6D1B8E0949C91863908817006DA2A19FFCAE88D4503FB53F8EBEB4",
        ))
        .and(body_string("a=1&b=2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client(&server);
    assert_ok!(
        client
            .executor()
            .execute(Method::POST, "exchange/cancellimit", &[("b", "2"), ("a", "1")], true)
            .await
    );

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_missing_credentials_never_reach_network() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;

    let empty_secret = client_with(&server, Credentials::new(TEST_KEY, ""), Duration::from_secs(5));
    let err = empty_secret.get_balances().await.unwrap_err();
    assert!(matches!(err, RestError::MissingCredentials));
    assert!(err.is_configuration_error());

    let empty_key = client_with(&server, Credentials::new("", "secret"), Duration::from_secs(5));
    let err = empty_key.get_order(1).await.unwrap_err();
    assert!(matches!(err, RestError::MissingCredentials));

    let anonymous = public_client(&server);
    let err = anonymous.get_balance("btc").await.unwrap_err();
    assert!(matches!(err, RestError::MissingCredentials));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_status_400_body_is_returned() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/exchange/order"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"errorMessage":"bad param"}"#))
        .mount(&server)
        .await;

    let client = authed_client(&server);
    let raw = assert_ok!(
        client
            .executor()
            .execute(Method::GET, "exchange/order", &[("orderId", "1")], true)
            .await
    );
    assert_eq!(raw.status, StatusCode::BAD_REQUEST);
    assert_eq!(raw.body, br#"{"errorMessage":"bad param"}"#.to_vec());
}

#[tokio::test]
async fn test_status_500_is_error_with_body() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"success":true}"#))
        .mount(&server)
        .await;

    let client = public_client(&server);
    let err = client.get_restrictions().await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(err.body(), Some(&br#"{"success":true}"#[..]));
    assert_eq!(err.to_string(), "500 Internal Server Error");
    assert!(!err.is_api_error());
}

#[tokio::test]
async fn test_timeout_fires_before_slow_response() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let client = client_with(
        &server,
        Credentials::new(TEST_KEY, "s3cr3t"),
        Duration::from_millis(50),
    );

    let started = Instant::now();
    let err = client.get_balances().await.unwrap_err();
    let elapsed = started.elapsed();

    assert!(err.is_timeout(), "expected timeout, got {:?}", err);
    assert!(elapsed < Duration::from_millis(500), "took {:?}", elapsed);
}

#[tokio::test]
async fn test_absolute_url_bypasses_base_url() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/exchange/restrictions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    // Default base URL points at the real exchange
    let client = assert_ok!(livecoin_rest::LivecoinClient::new());
    let target = format!("{}/exchange/restrictions", server.uri());
    assert_ok!(client.executor().execute(Method::GET, &target, &[], false).await);
}

#[tokio::test]
async fn test_query_roundtrip_through_server() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let params = [
        ("currencyPair", "BTC/USD"),
        ("types", "DEPOSIT,WITHDRAWAL"),
        ("start", "1409920436000"),
    ];
    let client = public_client(&server);
    assert_ok!(
        client
            .executor()
            .execute(Method::GET, "exchange/anything", &params, false)
            .await
    );

    let requests = server.received_requests().await.unwrap();
    let received: HashMap<String, String> = requests[0].url.query_pairs().into_owned().collect();
    let expected: HashMap<String, String> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(received, expected);
}

#[tokio::test]
async fn test_debug_dump_does_not_change_result() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/exchange/restrictions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "minBtcVolume": 0.0005,
            "restrictions": []
        })))
        .mount(&server)
        .await;

    let mut client = public_client(&server);
    client.set_debug(true);
    let restrictions = assert_ok!(client.get_restrictions().await);
    assert!(restrictions.success);
    assert!(restrictions.restrictions.is_empty());
}

/// Serves one response that promises 100 bytes, sends 6, then hangs up
async fn truncated_body_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"a\":1",
            )
            .await
            .unwrap();
        socket.flush().await.unwrap();
    });
    format!("http://{}", addr)
}

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}

#[tokio::test]
async fn test_body_read_failure_keeps_partial_body() {
    let base_url = truncated_body_server().await;
    let client = assert_ok!(LivecoinClient::with_config(
        ClientConfig::new().with_base_url(base_url)
    ));

    let err = client
        .executor()
        .execute(Method::GET, "exchange/restrictions", &[], false)
        .await
        .unwrap_err();

    assert!(matches!(err, RestError::BodyRead { .. }), "got {:?}", err);
    assert_eq!(err.body(), Some(&b"{\"a\":1"[..]));
}

#[tokio::test]
async fn test_debug_dumps_partial_body_on_read_failure() {
    let base_url = truncated_body_server().await;
    let client = assert_ok!(LivecoinClient::with_config(
        ClientConfig::new().with_base_url(base_url).with_debug(true)
    ));
    let (logs, _guard) = capture_logs();

    let err = client.get_restrictions().await.unwrap_err();
    assert!(matches!(err, RestError::BodyRead { .. }));

    let output = logs.contents();
    assert!(output.contains("dumpRequest"), "{}", output);
    assert!(output.contains("dumpResponse"), "{}", output);
    assert!(output.contains("200 OK"), "{}", output);
}

#[tokio::test]
async fn test_debug_dumps_missing_response_on_timeout() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let mut client = client_with(
        &server,
        Credentials::new(TEST_KEY, "s3cr3t"),
        Duration::from_millis(50),
    );
    client.set_debug(true);
    let (logs, _guard) = capture_logs();

    let err = client.get_balances().await.unwrap_err();
    assert!(err.is_timeout());

    let output = logs.contents();
    assert!(output.contains("dumpResponse"), "{}", output);
    assert!(output.contains("<none>"), "{}", output);
}
