//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::envelope;
use crate::error::RestResult;
use crate::executor::RequestExecutor;
use crate::types::{Balance, Transaction};
use reqwest::Method;
use tracing::{debug, instrument};

/// Transaction kinds requested from the history endpoint
const TRANSACTION_TYPES: &str = "DEPOSIT,WITHDRAWAL";

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    executor: &'a RequestExecutor,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(executor: &'a RequestExecutor) -> Self {
        Self { executor }
    }

    /// Get balances for every currency and bucket
    #[instrument(skip(self))]
    pub async fn get_balances(&self) -> RestResult<Vec<Balance>> {
        let raw = self
            .executor
            .execute(Method::GET, "payment/balances", &[], true)
            .await?;
        envelope::decode(&raw.body)
    }

    /// Get the balance of a single currency
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g., "btc", "USD"); upper-cased before sending
    #[instrument(skip(self))]
    pub async fn get_balance(&self, currency: &str) -> RestResult<Balance> {
        let currency = currency.to_uppercase();
        let raw = self
            .executor
            .execute(Method::GET, "payment/balance", &[("currency", currency.as_str())], true)
            .await?;
        envelope::decode(&raw.body)
    }

    /// Get deposit and withdrawal history
    ///
    /// # Arguments
    /// * `start` - Range start, Unix time in milliseconds
    /// * `end` - Range end, Unix time in milliseconds; `0` means now
    #[instrument(skip(self))]
    pub async fn get_transactions(&self, start: u64, end: u64) -> RestResult<Vec<Transaction>> {
        let end = if end == 0 { now_millis() } else { end };
        let start = start.to_string();
        let end = end.to_string();

        debug!("Fetching transactions from {} to {}", start, end);

        let params = [
            ("types", TRANSACTION_TYPES),
            ("start", start.as_str()),
            ("end", end.as_str()),
        ];
        let raw = self
            .executor
            .execute(Method::GET, "payment/history/transactions", &params, true)
            .await?;
        envelope::decode(&raw.body)
    }
}

fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
