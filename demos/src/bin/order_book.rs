//! Demo 3: Order Book Snapshot
//!
//! Fetches one order book and prints the top of book.
//!
//! Run: cargo run --bin order_book -- btc/usd

use colored::*;
use livecoin_rest::{Credentials, LivecoinClient};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

const LEVELS: usize = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pair = std::env::args().nth(1).unwrap_or_else(|| "BTC/USD".to_string());
    let client = LivecoinClient::with_credentials(Credentials::from_env()?)?;
    let book = client.get_order_book(&pair).await?;

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  ORDER BOOK {}", pair.to_uppercase()).cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for level in book.asks.iter().take(LEVELS).rev() {
        println!("  {:>16}  {}", level.price().to_string().red(), level.quantity());
    }
    println!("  {}", "─".repeat(30));
    for level in book.bids.iter().take(LEVELS) {
        println!("  {:>16}  {}", level.price().to_string().green(), level.quantity());
    }

    if let (Some(spread), Some(mid)) = (book.spread(), book.mid_price()) {
        let bps = if mid.is_zero() {
            Decimal::ZERO
        } else {
            spread / mid * Decimal::from(10_000)
        };
        println!(
            "\n  {} {}  {} {}  ({:.2} bps)",
            "SPREAD:".yellow(),
            spread,
            "MID:".yellow(),
            mid,
            bps
        );
    }

    Ok(())
}
