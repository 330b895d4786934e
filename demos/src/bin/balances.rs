//! Demo 2: Account Balances
//!
//! Reads LIVECOIN_API_KEY / LIVECOIN_API_SECRET and prints non-zero balances.
//! Set LIVECOIN_DEBUG=1 to dump every request and response.
//!
//! Run: RUST_LOG=livecoin_rest=info cargo run --bin balances

use colored::*;
use livecoin_rest::{BalanceKind, Credentials, LivecoinClient};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = Credentials::from_env()?;
    let mut client = LivecoinClient::with_timeout(credentials, Duration::from_secs(10))?;
    client.set_debug(std::env::var("LIVECOIN_DEBUG").is_ok_and(|v| v == "1"));

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  LIVECOIN BALANCES".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let balances = match client.get_balances().await {
        Ok(balances) => balances,
        Err(e) if e.is_api_error() => {
            println!("  {} {}", "Exchange rejected request:".red(), e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    for balance in balances
        .iter()
        .filter(|b| b.kind == BalanceKind::Available && !b.value.is_zero())
    {
        println!("  {:<8} {}", balance.currency.white().bold(), balance.value);
    }

    Ok(())
}
