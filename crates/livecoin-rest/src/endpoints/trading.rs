//! Trading endpoints for order management and trade history
//!
//! These endpoints require authentication.

use crate::envelope;
use crate::error::RestResult;
use crate::executor::RequestExecutor;
use crate::types::{CancelledOrder, NewOrder, OrderInfo, Trade};
use reqwest::Method;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Pair argument that requests trades across every market
pub const ALL_PAIRS: &str = "all";

/// Returned instead of an empty array when there is no trade history
const DATA_NOT_FOUND: &str = "Data not found";

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Get the account's trade history
    ///
    /// # Arguments
    /// * `currency_pair` - Pair such as "BTC/USD", or [`ALL_PAIRS`] for every market
    ///
    /// A pair without history yields an empty list.
    #[instrument(skip(self))]
    pub async fn get_trades(&self, currency_pair: &str) -> RestResult<Vec<Trade>> {
        let params: Vec<(&str, &str)> = if currency_pair == ALL_PAIRS {
            vec![]
        } else {
            vec![("currencyPair", currency_pair)]
        };

        let raw = self
            .executor
            .execute(Method::GET, "exchange/trades", &params, true)
            .await?;

        let response = envelope::parse(&raw.body)?;
        envelope::check(&response)?;
        if envelope::has_exception(&response, DATA_NOT_FOUND) {
            debug!("No trade history for {}", currency_pair);
            return Ok(Vec::new());
        }

        Ok(serde_json::from_slice(&raw.body)?)
    }

    /// Place a limit sell order
    ///
    /// # Arguments
    /// * `currency_pair` - Pair such as "BTC/USD"
    /// * `price` - Limit price
    /// * `quantity` - Amount to sell
    #[instrument(skip(self))]
    pub async fn sell_limit(
        &self,
        currency_pair: &str,
        price: Decimal,
        quantity: Decimal,
    ) -> RestResult<NewOrder> {
        debug!("Placing sell {} {} @ {}", quantity, currency_pair, price);
        self.place_limit("exchange/selllimit", currency_pair, price, quantity)
            .await
    }

    /// Place a limit buy order
    ///
    /// # Arguments
    /// * `currency_pair` - Pair such as "BTC/USD"
    /// * `price` - Limit price
    /// * `quantity` - Amount to buy
    #[instrument(skip(self))]
    pub async fn buy_limit(
        &self,
        currency_pair: &str,
        price: Decimal,
        quantity: Decimal,
    ) -> RestResult<NewOrder> {
        debug!("Placing buy {} {} @ {}", quantity, currency_pair, price);
        self.place_limit("exchange/buylimit", currency_pair, price, quantity)
            .await
    }

    /// Cancel a limit order
    ///
    /// # Arguments
    /// * `currency_pair` - Pair the order was placed on
    /// * `order_id` - ID returned when the order was placed
    #[instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        currency_pair: &str,
        order_id: u64,
    ) -> RestResult<CancelledOrder> {
        let order_id = order_id.to_string();
        let params = [
            ("currencyPair", currency_pair),
            ("orderId", order_id.as_str()),
        ];

        debug!("Cancelling order {}", order_id);

        let raw = self
            .executor
            .execute(Method::POST, "exchange/cancellimit", &params, true)
            .await?;
        envelope::decode(&raw.body)
    }

    /// Get the state of a single order
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: u64) -> RestResult<OrderInfo> {
        let order_id = order_id.to_string();
        let raw = self
            .executor
            .execute(Method::GET, "exchange/order", &[("orderId", order_id.as_str())], true)
            .await?;
        envelope::decode(&raw.body)
    }

    async fn place_limit(
        &self,
        path: &str,
        currency_pair: &str,
        price: Decimal,
        quantity: Decimal,
    ) -> RestResult<NewOrder> {
        let price = price.to_string();
        let quantity = quantity.to_string();
        let params = [
            ("currencyPair", currency_pair),
            ("price", price.as_str()),
            ("quantity", quantity.as_str()),
        ];

        let raw = self
            .executor
            .execute(Method::POST, path, &params, true)
            .await?;
        envelope::decode(&raw.body)
    }
}
