//! Market data endpoints
//!
//! The order book requires authentication; restrictions are public.

use crate::envelope;
use crate::error::RestResult;
use crate::executor::RequestExecutor;
use crate::types::{Orderbook, Restrictions};
use reqwest::Method;
use tracing::{debug, instrument};

/// Market data endpoints
pub struct MarketEndpoints<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Get the order book for a pair
    ///
    /// # Arguments
    /// * `currency_pair` - Pair such as "btc/usd"; upper-cased before sending
    #[instrument(skip(self))]
    pub async fn get_order_book(&self, currency_pair: &str) -> RestResult<Orderbook> {
        let pair = currency_pair.to_uppercase();
        debug!("Fetching orderbook for {}", pair);

        let raw = self
            .executor
            .execute(Method::GET, "exchange/order_book", &[("currencyPair", pair.as_str())], true)
            .await?;
        envelope::decode(&raw.body)
    }

    /// Get minimum volume and per-pair price scales
    #[instrument(skip(self))]
    pub async fn get_restrictions(&self) -> RestResult<Restrictions> {
        let raw = self
            .executor
            .execute(Method::GET, "exchange/restrictions", &[], false)
            .await?;
        envelope::decode(&raw.body)
    }
}
