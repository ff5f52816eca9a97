//! Client for the daily exchange-rate quotations published by the Banco
//! Central do Brasil.
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use cotacao::{CurrencyCode, QuoteClient};
//! use rust_decimal::Decimal;
//!
//! # async fn run() -> Result<(), cotacao::QuoteError> {
//! let client = QuoteClient::new()?;
//! let date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
//!
//! if let Some(quote) = client.fetch_quote(CurrencyCode::USD, date).await? {
//!     println!("{quote}");
//!     println!("{:?}", quote.to_local_currency(Decimal::from(10)));
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod clock;
mod config;
mod currency;
mod error;
mod exchange_rate;
mod parser;

pub use client::{QuoteClient, validate_date};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use currency::{CurrencyCode, UnknownCurrency};
pub use error::{DateRangeError, EARLIEST_QUOTE_DATE, QuoteError};
pub use exchange_rate::ExchangeQuote;
pub use parser::parse_quote;
