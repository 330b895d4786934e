//! REST API client for the Livecoin cryptocurrency exchange
//!
//! This crate provides an authenticated client for Livecoin's REST API,
//! covering balances, market data, trade history, and limit order management.
//!
//! # Features
//!
//! - **Account**: Balances, deposit/withdrawal history
//! - **Market Data**: Order book, trading restrictions
//! - **Trading**: Place and cancel limit orders, order status, trade history
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each request is signed with
//! HMAC-SHA256 over its form-encoded body and sent with `Api-key` and `Sign`
//! headers.
//!
//! # Errors
//!
//! Livecoin reports many failures inside HTTP 200/400 bodies as
//! `{"errorMessage": "..."}`; these surface as [`RestError::Api`]. Other
//! statuses surface as [`RestError::Status`] with the body attached.
//!
//! # Example
//!
//! ```no_run
//! use livecoin_rest::{Credentials, LivecoinClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = LivecoinClient::new()?;
//!     let restrictions = client.get_restrictions().await?;
//!     println!("Min BTC volume: {}", restrictions.min_btc_volume);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = LivecoinClient::with_credentials(creds)?;
//!     let book = auth_client.get_order_book("btc/usd").await?;
//!     println!("Spread: {:?}", book.spread());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod executor;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, LivecoinClient};
pub use error::{RestError, RestResult};
pub use executor::{EncodedRequest, RawResponse, RequestExecutor, BASE_URL, DEFAULT_TIMEOUT};
pub use livecoin_auth::Credentials;

// Re-export endpoint-specific types
pub use endpoints::trading::ALL_PAIRS;
pub use types::{
    // Account
    Balance, BalanceKind, Transaction, TransactionKind,
    // Market data
    Orderbook, PriceLevel, Restriction, Restrictions,
    // Trading
    CancelledOrder, NewOrder, OrderInfo, OrderStatus, Trade, TradeSide,
};
