//! Credentials and request signing for the Livecoin REST API
//!
//! Livecoin authenticates private calls with two headers:
//!
//! - `Api-key`: the public API key
//! - `Sign`: HMAC-SHA256 of the form-encoded request body, keyed with the
//!   API secret and rendered as uppercase hex
//!
//! # Example
//!
//! ```no_run
//! use livecoin_auth::Credentials;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let signature = creds.sign("currencyPair=BTC%2FUSD&orderId=42");
//!     println!("Sign: {}", signature);
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{sign_body, Credentials, RequestSigner, API_KEY_HEADER, SIGN_HEADER};
pub use error::{AuthError, AuthResult};
