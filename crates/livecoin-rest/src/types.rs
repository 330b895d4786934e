//! Types for Livecoin REST API responses

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Account Types
// ============================================================================

/// Balance bucket reported by `payment/balance(s)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceKind {
    /// Everything held
    Total,
    /// Free to trade
    Available,
    /// Locked in open orders
    Trade,
    /// Free to withdraw
    AvailableWithdrawal,
    /// Bucket not known to this client
    #[serde(other)]
    Unknown,
}

/// Balance of one currency in one bucket
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balance {
    /// Bucket
    #[serde(rename = "type")]
    pub kind: BalanceKind,
    /// Currency code
    pub currency: String,
    /// Amount
    pub value: Decimal,
}

/// Kind of a funding transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Incoming funds
    Deposit,
    /// Outgoing funds
    Withdrawal,
    /// Kind not known to this client
    #[serde(other)]
    Unknown,
}

/// Deposit or withdrawal record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction ID
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub id: String,
    /// Deposit or withdrawal
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Timestamp in milliseconds
    pub date: u64,
    /// Amount moved
    pub amount: Decimal,
    /// Fee charged
    #[serde(default)]
    pub fee: Option<Decimal>,
    /// Currency of the amount
    pub fixed_currency: String,
    /// Currency of the fee
    #[serde(default)]
    pub tax_currency: Option<String>,
    /// Amount in the counter currency, if converted
    #[serde(default)]
    pub variable_amount: Option<Decimal>,
    /// Counter currency, if converted
    #[serde(default)]
    pub variable_currency: Option<String>,
    /// External payment system or address
    #[serde(default)]
    pub external: Option<String>,
    /// Account login
    #[serde(default)]
    pub login: Option<String>,
}

// ============================================================================
// Market Data Types
// ============================================================================

/// One order book level: `[price, quantity]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PriceLevel(pub Decimal, pub Decimal);

impl PriceLevel {
    /// Level price
    pub fn price(&self) -> Decimal {
        self.0
    }

    /// Quantity resting at this price
    pub fn quantity(&self) -> Decimal {
        self.1
    }
}

/// Order book snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct Orderbook {
    /// Snapshot time in milliseconds
    #[serde(default)]
    pub timestamp: Option<u64>,
    /// Ask levels, best first
    pub asks: Vec<PriceLevel>,
    /// Bid levels, best first
    pub bids: Vec<PriceLevel>,
}

impl Orderbook {
    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(PriceLevel::price)
    }

    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(PriceLevel::price)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }

    /// Get the mid price (average of bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.best_ask()? + self.best_bid()?) / Decimal::TWO)
    }
}

/// Price precision of one currency pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restriction {
    /// Currency pair (e.g. "BTC/USD")
    pub currency_pair: String,
    /// Decimal places allowed in prices
    pub price_scale: u32,
}

/// Exchange-wide trading restrictions
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restrictions {
    /// Request succeeded
    pub success: bool,
    /// Minimum order volume in BTC
    pub min_btc_volume: Decimal,
    /// Per-pair restrictions
    pub restrictions: Vec<Restriction>,
}

impl Restrictions {
    /// Price scale for a pair, matched case-insensitively
    pub fn price_scale(&self, currency_pair: &str) -> Option<u32> {
        self.restrictions
            .iter()
            .find(|r| r.currency_pair.eq_ignore_ascii_case(currency_pair))
            .map(|r| r.price_scale)
    }
}

// ============================================================================
// Trading Types
// ============================================================================

/// Side of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    /// Buy
    #[serde(alias = "BUY")]
    Buy,
    /// Sell
    #[serde(alias = "SELL")]
    Sell,
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Executed trade from the account's history
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    /// Execution time in seconds
    pub datetime: u64,
    /// Trade ID
    pub id: u64,
    /// Client order ID, if any
    #[serde(default)]
    pub clientorderid: Option<u64>,
    /// Side
    #[serde(rename = "type")]
    pub side: TradeSide,
    /// Currency pair
    pub symbol: String,
    /// Execution price
    pub price: Decimal,
    /// Executed quantity
    pub quantity: Decimal,
    /// Commission charged
    #[serde(default)]
    pub commission: Option<Decimal>,
}

/// Response to a limit order placement
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Request succeeded
    pub success: bool,
    /// Order was added to the book
    pub added: bool,
    /// Assigned order ID
    #[serde(default)]
    pub order_id: Option<u64>,
}

/// Response to an order cancellation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledOrder {
    /// Request succeeded
    pub success: bool,
    /// Order was cancelled
    pub cancelled: bool,
    /// Exception text, if the cancel did not happen
    #[serde(default)]
    pub exception: Option<String>,
    /// Quantity left unfilled
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Quantity filled before cancellation
    #[serde(default)]
    pub trade_quantity: Option<Decimal>,
}

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Resting on the book
    Open,
    /// Fully filled
    Executed,
    /// Cancelled without fills
    Cancelled,
    /// Partially filled, still resting
    PartiallyFilled,
    /// Partially filled, then cancelled
    PartiallyFilledAndCancelled,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

/// Detail of a single order
#[derive(Debug, Clone, Deserialize)]
pub struct OrderInfo {
    /// Order ID
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub id: String,
    /// Client ID
    #[serde(default, deserialize_with = "string_or_number::deserialize_option")]
    pub client_id: Option<String>,
    /// Lifecycle state
    pub status: OrderStatus,
    /// Currency pair
    #[serde(rename = "symbol")]
    pub currency_pair: String,
    /// Limit price; `null` reads as zero
    #[serde(deserialize_with = "null_as_zero")]
    pub price: Decimal,
    /// Original quantity
    #[serde(deserialize_with = "null_as_zero")]
    pub quantity: Decimal,
    /// Quantity not yet filled
    #[serde(deserialize_with = "null_as_zero")]
    pub remaining_quantity: Decimal,
    /// Funds blocked for the order
    #[serde(default)]
    pub blocked: Option<Decimal>,
    /// Funds still blocked
    #[serde(default)]
    pub blocked_remain: Option<Decimal>,
    /// Commission rate
    #[serde(default)]
    pub commission_rate: Option<Decimal>,
    /// Fills, passed through as returned
    #[serde(default)]
    pub trades: serde_json::Value,
}

impl OrderInfo {
    /// Quantity filled so far
    pub fn filled_quantity(&self) -> Decimal {
        self.quantity - self.remaining_quantity
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

/// IDs arrive as JSON numbers or strings depending on the endpoint
mod string_or_number {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Unsigned(u64),
        Signed(i64),
    }

    impl From<Raw> for String {
        fn from(raw: Raw) -> Self {
            match raw {
                Raw::Str(s) => s,
                Raw::Unsigned(n) => n.to_string(),
                Raw::Signed(n) => n.to_string(),
            }
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Raw::deserialize(deserializer).map(String::from)
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Raw>::deserialize(deserializer)?.map(String::from))
    }
}
