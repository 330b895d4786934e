//! Common test utilities for livecoin-rest integration tests

#![allow(dead_code)]

use livecoin_rest::{ClientConfig, Credentials, LivecoinClient};
use std::time::Duration;
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-api-key";
pub const TEST_SECRET: &str = "s3cr3t";

/// HMAC-SHA256("s3cr3t", "") in uppercase hex
pub const EMPTY_BODY_SIGN: &str =
    "3C81CC9496E1C25250F6CCB85F697C1BB623E3480D6538AD8CB6A6648142777D";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, without credentials
pub fn public_client(server: &MockServer) -> LivecoinClient {
    LivecoinClient::with_config(ClientConfig::new().with_base_url(server.uri()))
        .expect("client should build")
}

/// Client pointed at the mock server with the test key pair
pub fn authed_client(server: &MockServer) -> LivecoinClient {
    client_with(server, Credentials::new(TEST_KEY, TEST_SECRET), Duration::from_secs(5))
}

/// Client pointed at the mock server with explicit credentials and timeout
pub fn client_with(server: &MockServer, credentials: Credentials, timeout: Duration) -> LivecoinClient {
    LivecoinClient::with_config(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_credentials(credentials)
            .with_timeout(timeout),
    )
    .expect("client should build")
}
