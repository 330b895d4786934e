//! Demo 1: Trading Restrictions
//!
//! Lists the price scale of every pair. Public endpoint, no credentials.
//!
//! Run: cargo run --bin restrictions [PAIR]

use colored::*;
use livecoin_rest::LivecoinClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  LIVECOIN TRADING RESTRICTIONS".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = LivecoinClient::new()?;
    let restrictions = client.get_restrictions().await?;

    println!(
        "  {} {} BTC\n",
        "Minimum order volume:".yellow(),
        restrictions.min_btc_volume
    );

    if let Some(pair) = std::env::args().nth(1) {
        match restrictions.price_scale(&pair) {
            Some(scale) => println!("  {} {:<12} {} decimals", "✓".green(), pair, scale),
            None => println!("  {} {} is not listed", "✗".red(), pair),
        }
        return Ok(());
    }

    let mut listed = restrictions.restrictions.clone();
    listed.sort_by(|a, b| a.currency_pair.cmp(&b.currency_pair));
    for restriction in &listed {
        println!(
            "  {:<12} {} decimals",
            restriction.currency_pair.white().bold(),
            restriction.price_scale
        );
    }
    println!("\n  {} pairs", listed.len());

    Ok(())
}
