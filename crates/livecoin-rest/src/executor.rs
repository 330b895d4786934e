//! Request execution: encoding, signing, and timeout-bounded dispatch
//!
//! Every endpoint funnels through [`RequestExecutor::execute`], which turns a
//! method, a resource path (or absolute URL), and a parameter list into the
//! raw response bytes.
//!
//! - GET parameters are merged into the query string and no body is sent.
//! - Any other method carries the parameters as a form-encoded body.
//! - Authenticated requests are signed over the body string. GET has no body,
//!   so its signature covers the empty string.
//! - Status 200 and 400 both carry meaningful JSON; every other status is an
//!   error that still hands back the body.

use crate::client::ClientConfig;
use crate::error::{RestError, RestResult};
use livecoin_auth::{Credentials, RequestSigner};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response, StatusCode, Url};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Production API endpoint
pub const BASE_URL: &str = "https://api.livecoin.net";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_ACCEPT: &str = "application/json";

/// A request after parameter encoding and signing, ready to dispatch
#[derive(Debug, Clone)]
pub struct EncodedRequest {
    /// HTTP method
    pub method: Method,
    /// Target URL; for GET it carries every parameter
    pub url: Url,
    /// Form-encoded body; `None` for GET
    pub body: Option<String>,
    /// Headers in insertion order
    pub headers: Vec<(&'static str, String)>,
}

impl EncodedRequest {
    /// Look up a header value by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn build(&self, client: &Client) -> RestResult<reqwest::Request> {
        let mut builder = client.request(self.method.clone(), self.url.clone());
        for (name, value) in &self.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &self.body {
            builder = builder.body(body.clone());
        }
        Ok(builder.build()?)
    }
}

/// Status and body of a response whose status was 200 or 400
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Full body
    pub body: Vec<u8>,
}

/// Executes requests against the Livecoin API
pub struct RequestExecutor {
    http_client: Client,
    credentials: Option<Credentials>,
    base_url: String,
    timeout: Duration,
    debug: bool,
}

impl RequestExecutor {
    /// Create an executor from client configuration
    pub fn new(config: ClientConfig) -> RestResult<Self> {
        let http_client = match config.http_client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(config.user_agent.as_deref().unwrap_or("livecoin-rest/0.1.0"))
                .build()?,
        };

        Ok(Self {
            http_client,
            credentials: config.credentials,
            base_url: config.base_url,
            timeout: effective_timeout(config.timeout),
            debug: config.debug,
        })
    }

    /// Check if the executor holds a complete key/secret pair
    pub fn has_credentials(&self) -> bool {
        self.credentials
            .as_ref()
            .map(Credentials::is_complete)
            .unwrap_or(false)
    }

    /// Base URL resource paths are joined to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Change the request timeout; zero falls back to the default
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = effective_timeout(timeout);
    }

    /// Whether request/response dumps are enabled
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Enable or disable request/response dumps
    pub fn set_debug(&mut self, enable: bool) {
        self.debug = enable;
    }

    /// Encode parameters and sign, without touching the network
    pub fn encode(
        &self,
        method: Method,
        target: &str,
        params: &[(&str, &str)],
        auth_needed: bool,
    ) -> RestResult<EncodedRequest> {
        let mut url = self.resolve(target)?;

        let body = if method == Method::GET {
            let mut merged: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
            for (key, value) in params {
                merged.insert((*key).to_string(), (*value).to_string());
            }
            if merged.is_empty() {
                url.set_query(None);
            } else {
                url.query_pairs_mut().clear().extend_pairs(merged.iter());
            }
            None
        } else {
            let form: BTreeMap<&str, &str> = params.iter().copied().collect();
            let encoded = serde_urlencoded::to_string(&form)
                .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
            Some(encoded)
        };

        let mut headers = Vec::with_capacity(4);
        if method == Method::POST || method == Method::PUT {
            headers.push(("Content-Type", FORM_CONTENT_TYPE.to_string()));
        }
        headers.push(("Accept", JSON_ACCEPT.to_string()));

        if auth_needed {
            let credentials = self
                .credentials
                .as_ref()
                .ok_or(RestError::MissingCredentials)?;
            let signer = RequestSigner::new(credentials)?;
            headers.extend(signer.headers(body.as_deref().unwrap_or("")));
        }

        Ok(EncodedRequest {
            method,
            url,
            body,
            headers,
        })
    }

    /// Execute a request and return the raw body
    ///
    /// The HTTP call runs on its own task and races the configured timeout.
    /// When the timer wins, the task is aborted and [`RestError::Timeout`]
    /// is returned.
    #[instrument(skip(self, params))]
    pub async fn execute(
        &self,
        method: Method,
        target: &str,
        params: &[(&str, &str)],
        auth_needed: bool,
    ) -> RestResult<RawResponse> {
        let encoded = self.encode(method, target, params, auth_needed)?;
        let request = encoded.build(&self.http_client)?;

        if self.debug {
            dump_request(&encoded);
        }
        debug!("Sending {} {}", encoded.method, encoded.url);

        let mut response = match self.dispatch(request).await {
            Ok(response) => response,
            Err(e) => {
                if self.debug {
                    dump_no_response(&e);
                }
                return Err(e);
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        let body = match read_body(&mut response).await {
            Ok(body) => body,
            Err(e) => {
                if self.debug {
                    dump_response(status, &headers, e.body().unwrap_or_default());
                }
                return Err(e);
            }
        };

        if self.debug {
            dump_response(status, &headers, &body);
        }

        if status == StatusCode::OK || status == StatusCode::BAD_REQUEST {
            Ok(RawResponse { status, body })
        } else {
            Err(RestError::Status { status, body })
        }
    }

    /// Send on a separate task and race it against the timeout
    async fn dispatch(&self, request: reqwest::Request) -> RestResult<Response> {
        let client = self.http_client.clone();
        let mut task = tokio::spawn(async move { client.execute(request).await });
        let outcome = tokio::time::timeout(self.timeout, &mut task).await;
        match outcome {
            Ok(joined) => Ok(joined??),
            Err(_) => {
                task.abort();
                debug!("Request timed out after {:?}", self.timeout);
                Err(RestError::Timeout {
                    timeout: self.timeout,
                })
            }
        }
    }

    fn resolve(&self, target: &str) -> RestResult<Url> {
        if target.starts_with("http") {
            return Ok(Url::parse(target)?);
        }
        let joined = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            target.trim_start_matches('/')
        );
        Ok(Url::parse(&joined)?)
    }
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

fn effective_timeout(timeout: Duration) -> Duration {
    if timeout.is_zero() {
        DEFAULT_TIMEOUT
    } else {
        timeout
    }
}

/// Read the whole body, keeping what arrived if the stream fails
async fn read_body(response: &mut Response) -> RestResult<Vec<u8>> {
    let mut body = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => return Ok(body),
            Err(source) => {
                return Err(RestError::BodyRead {
                    source,
                    partial: body,
                })
            }
        }
    }
}

fn dump_request(encoded: &EncodedRequest) {
    info!(
        target: "livecoin_rest::dump",
        method = %encoded.method,
        url = %encoded.url,
        headers = ?encoded.headers,
        body = encoded.body.as_deref().unwrap_or(""),
        "dumpRequest"
    );
}

fn dump_response(status: StatusCode, headers: &HeaderMap, body: &[u8]) {
    info!(
        target: "livecoin_rest::dump",
        status = %status,
        headers = ?headers,
        body = %String::from_utf8_lossy(body),
        "dumpResponse"
    );
}

fn dump_no_response(error: &RestError) {
    info!(
        target: "livecoin_rest::dump",
        status = "<none>",
        error = %error,
        "dumpResponse"
    );
}
