//! Authentication credentials for the Livecoin API
//!
//! Implements HMAC-SHA256 body signing as required by Livecoin's private
//! endpoints.
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use tracing::trace;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the public API key
pub const API_KEY_HEADER: &str = "Api-key";

/// Header carrying the body signature
pub const SIGN_HEADER: &str = "Sign";

const API_KEY_ENV: &str = "LIVECOIN_API_KEY";
const API_SECRET_ENV: &str = "LIVECOIN_API_SECRET";

/// HMAC-SHA256 of `body` keyed with `secret`, as uppercase hex
pub fn sign_body(secret: &[u8], body: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(body.as_bytes());
    hex::encode_upper(mac.finalize().into_bytes())
}

/// API credentials for authenticated requests
///
/// Either half may be empty; such credentials are accepted at construction
/// and rejected by [`RequestSigner::new`] when a private call is attempted.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret (zeroized on drop)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `LIVECOIN_API_KEY` and `LIVECOIN_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        if api_key.trim() != api_key {
            return Err(AuthError::InvalidCredentials(format!(
                "{} has surrounding whitespace",
                API_KEY_ENV
            )));
        }

        Ok(Self::new(api_key, api_secret))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Whether both the key and the secret are non-empty
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.expose_secret().is_empty()
    }

    /// Sign a form-encoded request body
    ///
    /// Returns the uppercase hex HMAC-SHA256 of `body` keyed with the secret.
    /// GET requests carry no body and are signed over the empty string.
    pub fn sign(&self, body: &str) -> String {
        sign_body(self.api_secret.expose_secret().as_bytes(), body)
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates a new secret box with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", prefix))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Signer for a single authenticated request
///
/// Construction fails when the credentials are incomplete, so a signer in
/// hand always produces usable headers.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer
    pub fn new(credentials: &'a Credentials) -> AuthResult<Self> {
        if !credentials.is_complete() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(Self { credentials })
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the request with the given body
    pub fn sign(&self, body: &str) -> String {
        trace!(body_len = body.len(), "signing request body");
        self.credentials.sign(body)
    }

    /// Header pairs to attach to the request
    pub fn headers(&self, body: &str) -> [(&'static str, String); 2] {
        [
            (API_KEY_HEADER, self.api_key().to_string()),
            (SIGN_HEADER, self.sign(body)),
        ]
    }
}
