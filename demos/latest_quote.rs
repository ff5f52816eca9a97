//! Prints the latest closing quotation for a currency.
//!
//! Run with: cargo run --example latest_quote -- EUR 2020-01-02

use anyhow::Result;
use chrono::NaiveDate;
use cotacao::{ClientConfig, CurrencyCode, QuoteClient};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let currency: CurrencyCode = args.next().as_deref().unwrap_or("USD").parse()?;

    let client = QuoteClient::with_config(ClientConfig::from_env()?)?;

    let quote = match args.next() {
        Some(date) => {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;
            client.fetch_quote(currency, date).await?
        }
        None => client.fetch_today(currency).await?,
    };

    let Some(quote) = quote else {
        anyhow::bail!("The bank returned no quotation for {}", currency);
    };

    println!("{}", quote);
    if let Some(reais) = quote.to_local_currency(Decimal::ONE_HUNDRED) {
        println!("100 {} = {} BRL", currency, reais.round_dp(2));
    }

    Ok(())
}
