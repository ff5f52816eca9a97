use chrono::NaiveDate;

use crate::currency::CurrencyCode;

/// Earliest date the remote service holds quotations for.
pub const EARLIEST_QUOTE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1999, 2, 1) {
    Some(date) => date,
    None => panic!("invalid horizon date"),
};

/// Rejected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateRangeError {
    #[error("can't get exchange rates from the future: {requested} is after {today}")]
    Future {
        requested: NaiveDate,
        today: NaiveDate,
    },

    #[error(
        "can't get exchange rates for days older than {earliest}: got {requested}",
        earliest = EARLIEST_QUOTE_DATE
    )]
    TooOld { requested: NaiveDate },
}

/// Errors returned by [`QuoteClient`](crate::QuoteClient).
///
/// A response that arrives but lacks the quotation fields is not an error;
/// the client reports it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("Invalid date range: {0}")]
    InvalidDateRange(#[from] DateRangeError),

    #[error("No exchange rate found for {currency} on {date}")]
    ExchangeRateNotFound {
        currency: CurrencyCode,
        date: NaiveDate,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed {field} field: {value:?}")]
    MalformedField { field: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuoteError {
    /// Whether the service reported no quotation for the currency and date.
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuoteError::ExchangeRateNotFound { .. })
    }

    /// HTTP status carried by a transport failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            QuoteError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
