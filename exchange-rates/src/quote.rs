//! Bid/ask quotes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

/// A bid/ask pair for one currency on one date, denominated in PLN.
///
/// Quotes are immutable once obtained: fields are private and there are no
/// setters. Conversions produce new values instead of rewriting a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    currency: CurrencyCode,
    bid: Decimal,
    ask: Decimal,
    effective_date: NaiveDate,
}

impl Quote {
    pub fn new(currency: CurrencyCode, bid: Decimal, ask: Decimal, effective_date: NaiveDate) -> Self {
        Self {
            currency,
            bid,
            ask,
            effective_date,
        }
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Price at which the bank buys one unit.
    pub fn bid(&self) -> Decimal {
        self.bid
    }

    /// Price at which the bank sells one unit.
    pub fn ask(&self) -> Decimal {
        self.ask
    }

    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }
}
