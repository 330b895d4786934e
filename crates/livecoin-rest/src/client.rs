//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::RestResult;
use crate::executor::{RequestExecutor, BASE_URL, DEFAULT_TIMEOUT};
use crate::types::{
    Balance, CancelledOrder, NewOrder, OrderInfo, Orderbook, Restrictions, Trade, Transaction,
};
use livecoin_auth::Credentials;
use reqwest::Client;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::info;

/// Livecoin REST API client
///
/// Provides access to both public and private endpoints.
///
/// # Example
///
/// ```no_run
/// use livecoin_rest::{Credentials, LivecoinClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = LivecoinClient::new()?;
///     let restrictions = client.get_restrictions().await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = LivecoinClient::with_credentials(creds)?;
///     let balances = auth_client.get_balances().await?;
///
///     Ok(())
/// }
/// ```
pub struct LivecoinClient {
    executor: RequestExecutor,
}

impl LivecoinClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will succeed.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a client with credentials and a custom timeout
    ///
    /// A zero timeout falls back to 30 seconds.
    pub fn with_timeout(credentials: Credentials, timeout: Duration) -> RestResult<Self> {
        Self::with_config(
            ClientConfig::new()
                .with_credentials(credentials)
                .with_timeout(timeout),
        )
    }

    /// Create a client with credentials on top of a pre-built HTTP client
    pub fn with_http_client(credentials: Credentials, http_client: Client) -> RestResult<Self> {
        Self::with_config(
            ClientConfig::new()
                .with_credentials(credentials)
                .with_http_client(http_client),
        )
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let executor = RequestExecutor::new(config)?;

        info!(base_url = executor.base_url(), "Created Livecoin REST client");

        Ok(Self { executor })
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.executor.has_credentials()
    }

    /// Enable or disable dumps of every request and response
    pub fn set_debug(&mut self, enable: bool) {
        self.executor.set_debug(enable);
    }

    /// Change the per-request timeout; zero falls back to 30 seconds
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.executor.set_timeout(timeout);
    }

    /// Current per-request timeout
    pub fn timeout(&self) -> Duration {
        self.executor.timeout()
    }

    /// The underlying request executor
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    // ========================================================================
    // Account Endpoints
    // ========================================================================

    /// Get account endpoints
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.executor)
    }

    /// Get all balances
    pub async fn get_balances(&self) -> RestResult<Vec<Balance>> {
        self.account().get_balances().await
    }

    /// Get the balance of one currency
    pub async fn get_balance(&self, currency: &str) -> RestResult<Balance> {
        self.account().get_balance(currency).await
    }

    /// Get deposit and withdrawal history; `end == 0` means now
    pub async fn get_transactions(&self, start: u64, end: u64) -> RestResult<Vec<Transaction>> {
        self.account().get_transactions(start, end).await
    }

    // ========================================================================
    // Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.executor)
    }

    /// Get the order book for a pair
    pub async fn get_order_book(&self, currency_pair: &str) -> RestResult<Orderbook> {
        self.market().get_order_book(currency_pair).await
    }

    /// Get trading restrictions
    pub async fn get_restrictions(&self) -> RestResult<Restrictions> {
        self.market().get_restrictions().await
    }

    // ========================================================================
    // Trading Endpoints
    // ========================================================================

    /// Get trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(&self.executor)
    }

    /// Get trade history for a pair, or for every pair with `"all"`
    pub async fn get_trades(&self, currency_pair: &str) -> RestResult<Vec<Trade>> {
        self.trading().get_trades(currency_pair).await
    }

    /// Place a limit sell order
    pub async fn sell_limit(
        &self,
        currency_pair: &str,
        price: Decimal,
        quantity: Decimal,
    ) -> RestResult<NewOrder> {
        self.trading().sell_limit(currency_pair, price, quantity).await
    }

    /// Place a limit buy order
    pub async fn buy_limit(
        &self,
        currency_pair: &str,
        price: Decimal,
        quantity: Decimal,
    ) -> RestResult<NewOrder> {
        self.trading().buy_limit(currency_pair, price, quantity).await
    }

    /// Cancel a limit order
    pub async fn cancel_order(&self, currency_pair: &str, order_id: u64) -> RestResult<CancelledOrder> {
        self.trading().cancel_order(currency_pair, order_id).await
    }

    /// Get the state of an order
    pub async fn get_order(&self, order_id: u64) -> RestResult<OrderInfo> {
        self.trading().get_order(order_id).await
    }
}

impl std::fmt::Debug for LivecoinClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LivecoinClient")
            .field("has_credentials", &self.has_credentials())
            .field("timeout", &self.timeout())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Base URL resource paths are joined to
    pub base_url: String,
    /// Per-request timeout; zero means the 30 second default
    pub timeout: Duration,
    /// Dump every request and response
    pub debug: bool,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Pre-built HTTP client; `user_agent` is ignored when set
    pub http_client: Option<Client>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            debug: false,
            user_agent: None,
            http_client: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable request/response dumps
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a pre-built HTTP client
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = Some(http_client);
        self
    }
}
