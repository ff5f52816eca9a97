use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::{Client, StatusCode};

use crate::clock::{Clock, SystemClock};
use crate::config::ClientConfig;
use crate::currency::CurrencyCode;
use crate::error::{DateRangeError, EARLIEST_QUOTE_DATE, QuoteError};
use crate::exchange_rate::ExchangeQuote;
use crate::parser::parse_quote;

/// Checks `date` against the window the service can answer for.
pub fn validate_date(date: NaiveDate, today: NaiveDate) -> Result<(), DateRangeError> {
    if date > today {
        return Err(DateRangeError::Future {
            requested: date,
            today,
        });
    }
    if date < EARLIEST_QUOTE_DATE {
        return Err(DateRangeError::TooOld { requested: date });
    }
    Ok(())
}

/// Fetches closing quotations from the central bank, one request per call.
///
/// The client keeps no state between calls and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct QuoteClient<C = SystemClock> {
    config: ClientConfig,
    http: Client,
    clock: C,
}

impl QuoteClient<SystemClock> {
    pub fn new() -> Result<Self, QuoteError> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, QuoteError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
            clock: SystemClock,
        })
    }
}

impl<C: Clock> QuoteClient<C> {
    /// Replaces the source of "today" used for validation and [`fetch_today`](Self::fetch_today).
    pub fn with_clock<D: Clock>(self, clock: D) -> QuoteClient<D> {
        QuoteClient {
            config: self.config,
            http: self.http,
            clock,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn quote_url(&self, currency: CurrencyCode, date: NaiveDate) -> String {
        format!(
            "{}/cotacao/fechamento/ultima/1/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            currency.id(),
            date.format("%Y-%m-%d")
        )
    }

    /// Quotation for `currency` on the clock's current date.
    pub async fn fetch_today(
        &self,
        currency: CurrencyCode,
    ) -> Result<Option<ExchangeQuote>, QuoteError> {
        self.fetch_quote(currency, self.clock.today()).await
    }

    /// Quotation for `currency` on `date`.
    ///
    /// `Ok(None)` means the service answered but the response did not carry
    /// a complete quotation.
    pub async fn fetch_quote(
        &self,
        currency: CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<ExchangeQuote>, QuoteError> {
        validate_date(date, self.clock.today())?;

        let url = self.quote_url(currency, date);
        let line = self.load_line(&url, currency, date).await?;

        let quote = parse_quote(currency, &line)?;
        match &quote {
            Some(quote) => debug!("Fetched {}", quote),
            None => warn!("Response for {} on {} has no complete quotation", currency, date),
        }

        Ok(quote)
    }

    async fn load_line(
        &self,
        url: &str,
        currency: CurrencyCode,
        date: NaiveDate,
    ) -> Result<String, QuoteError> {
        debug!("GET {}", url);
        let resp = self.http.get(url).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(QuoteError::ExchangeRateNotFound { currency, date });
        }

        let mut resp = resp.error_for_status()?;
        let mut line = Vec::new();
        while let Some(chunk) = resp.chunk().await? {
            if take_line(&mut line, &chunk) {
                break;
            }
        }

        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

/// Appends `chunk` to `line` up to the first newline. Returns `true` once the
/// line is complete; a trailing `\r` is dropped.
fn take_line(line: &mut Vec<u8>, chunk: &[u8]) -> bool {
    match chunk.iter().position(|&b| b == b'\n') {
        Some(end) => {
            line.extend_from_slice(&chunk[..end]);
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            true
        }
        None => {
            line.extend_from_slice(chunk);
            false
        }
    }
}
