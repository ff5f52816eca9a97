use std::fmt;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

/// Closing quotation of one currency against the real, as published by the
/// central bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeQuote {
    currency: CurrencyCode,
    timestamp: DateTime<FixedOffset>,
    buying_rate: Decimal,
    selling_rate: Decimal,
}

impl ExchangeQuote {
    pub fn new(
        currency: CurrencyCode,
        timestamp: DateTime<FixedOffset>,
        buying_rate: Decimal,
        selling_rate: Decimal,
    ) -> Self {
        Self {
            currency,
            timestamp,
            buying_rate,
            selling_rate,
        }
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// When the central bank recorded the quotation.
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Reais paid by the bank per unit of the foreign currency.
    pub fn buying_rate(&self) -> Decimal {
        self.buying_rate
    }

    /// Reais charged by the bank per unit of the foreign currency.
    pub fn selling_rate(&self) -> Decimal {
        self.selling_rate
    }

    /// Converts `amount` of the foreign currency into reais at the buying rate.
    ///
    /// Returns `None` when the rate is not positive or the product overflows.
    pub fn to_local_currency(&self, amount: Decimal) -> Option<Decimal> {
        if self.buying_rate > Decimal::ZERO {
            amount.checked_mul(self.buying_rate)
        } else {
            None
        }
    }

    /// Converts `amount` reais into the foreign currency at the selling rate.
    ///
    /// Returns `None` when the rate is not positive.
    pub fn from_local_currency(&self, amount: Decimal) -> Option<Decimal> {
        if self.selling_rate > Decimal::ZERO {
            amount.checked_div(self.selling_rate)
        } else {
            None
        }
    }
}

impl fmt::Display for ExchangeQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} - BUY: {} / SELL: {}.",
            self.currency,
            self.timestamp.format("%Y-%m-%d at %H:%M (%z)"),
            self.buying_rate.normalize(),
            self.selling_rate.normalize()
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn quote(buying_rate: Decimal, selling_rate: Decimal) -> ExchangeQuote {
        let timestamp = DateTime::parse_from_rfc3339("2020-01-02T13:05:00-02:00").unwrap();
        ExchangeQuote::new(CurrencyCode::USD, timestamp, buying_rate, selling_rate)
    }

    #[test]
    fn to_local_uses_buying_rate() {
        let quote = quote(dec!(5.25), dec!(5.30));
        assert_eq!(quote.to_local_currency(dec!(100)), Some(dec!(525.0)));
    }

    #[test]
    fn from_local_uses_selling_rate() {
        let quote = quote(dec!(5.25), dec!(5.30));
        assert_eq!(
            quote.from_local_currency(dec!(100)),
            Some(dec!(100) / dec!(5.30))
        );
    }

    #[test]
    fn zero_rates_give_no_result() {
        let quote = quote(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(quote.to_local_currency(dec!(100)), None);
        assert_eq!(quote.from_local_currency(dec!(100)), None);
    }

    #[test]
    fn zero_on_one_side_only_blocks_that_side() {
        let quote = quote(Decimal::ZERO, dec!(4.00));
        assert_eq!(quote.to_local_currency(dec!(10)), None);
        assert_eq!(quote.from_local_currency(dec!(10)), Some(dec!(2.5)));
    }

    #[test]
    fn display_matches_bank_notation() {
        let quote = quote(dec!(4.02000000), dec!(4.02500000));
        assert_eq!(
            quote.to_string(),
            "USD on 2020-01-02 at 13:05 (-0200) - BUY: 4.02 / SELL: 4.025."
        );
    }
}
