//! Pulls the quotation fields out of the service's response line.
//!
//! The tags are searched independently, so their order and whatever sits
//! between them do not matter.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset};
use log::trace;
use regex::Regex;
use rust_decimal::Decimal;

use crate::currency::CurrencyCode;
use crate::error::QuoteError;
use crate::exchange_rate::ExchangeQuote;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

fn currency_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<codigoMoeda>(\d{1,3})</codigoMoeda>").expect("valid currency pattern")
    })
}

fn timestamp_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"<dataHoraCotacao>(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}[+-]\d{4})</dataHoraCotacao>",
        )
        .expect("valid timestamp pattern")
    })
}

fn buying_rate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<taxaCompra>(\d+\.\d{8})</taxaCompra>").expect("valid buying rate pattern")
    })
}

fn selling_rate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<taxaVenda>(\d+\.\d{8})</taxaVenda>").expect("valid selling rate pattern")
    })
}

fn capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Fields as they appear in the response, before conversion.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RawQuoteFields<'a> {
    pub currency_id: Option<&'a str>,
    pub timestamp: Option<&'a str>,
    pub buying_rate: Option<&'a str>,
    pub selling_rate: Option<&'a str>,
}

impl<'a> RawQuoteFields<'a> {
    pub(crate) fn extract(line: &'a str) -> Self {
        Self {
            currency_id: capture(currency_pattern(), line),
            timestamp: capture(timestamp_pattern(), line),
            buying_rate: capture(buying_rate_pattern(), line),
            selling_rate: capture(selling_rate_pattern(), line),
        }
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, QuoteError> {
    DateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| QuoteError::MalformedField {
        field: "dataHoraCotacao",
        value: value.to_string(),
    })
}

fn parse_rate(field: &'static str, value: &str) -> Result<Decimal, QuoteError> {
    Decimal::from_str(value).map_err(|_| QuoteError::MalformedField {
        field,
        value: value.to_string(),
    })
}

/// Builds a quote for `currency` from one response line.
///
/// Returns `Ok(None)` when the timestamp or either rate is missing. The
/// currency code embedded in the line is not checked against `currency`.
pub fn parse_quote(currency: CurrencyCode, line: &str) -> Result<Option<ExchangeQuote>, QuoteError> {
    let raw = RawQuoteFields::extract(line);
    trace!("Response currency id {:?}, requested {}", raw.currency_id, currency.id());

    let (Some(timestamp), Some(buying_rate), Some(selling_rate)) =
        (raw.timestamp, raw.buying_rate, raw.selling_rate)
    else {
        return Ok(None);
    };

    Ok(Some(ExchangeQuote::new(
        currency,
        parse_timestamp(timestamp)?,
        parse_rate("taxaCompra", buying_rate)?,
        parse_rate("taxaVenda", selling_rate)?,
    )))
}
