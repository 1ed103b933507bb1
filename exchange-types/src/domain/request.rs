//! Parsed batch request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use exchange_rates::CurrencyCode;

/// The four tokens of a batch line exactly as they appeared in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub source: String,
    pub amount: String,
    pub target: String,
    pub date: String,
}

impl RawRecord {
    /// `{source}_{amount}_{target}_{date}` built from the raw tokens.
    pub fn composite_key(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.source, self.amount, self.target, self.date
        )
    }
}

/// A validated batch line.
///
/// Lives only for the processing of the line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRequest {
    pub source_currency: CurrencyCode,
    /// Strictly positive.
    pub amount: Decimal,
    /// `None` when the amount settles in PLN.
    pub target_currency: Option<CurrencyCode>,
    pub date: NaiveDate,
    pub raw: RawRecord,
}

impl ExchangeRequest {
    pub fn composite_key(&self) -> String {
        self.raw.composite_key()
    }

    /// Lookup date as `yyyy-MM-dd`.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn settles_in_base(&self) -> bool {
        self.target_currency.is_none()
    }
}
