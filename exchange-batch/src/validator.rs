//! Batch line validation.
//!
//! A line is `SOURCE AMOUNT TARGET DATE`, separated by single spaces. Fields
//! are checked in a fixed order and the first failure wins:
//! amount, date, source currency, target currency.

use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use exchange_types::{
    CurrencyAvailability, CurrencyCode, ErrorKind, ExchangeRequest, RawRecord, ValidationError,
};

/// Parses raw batch lines into [`ExchangeRequest`]s.
#[derive(Debug, Clone)]
pub struct BatchRecordValidator {
    availability: Arc<CurrencyAvailability>,
}

impl BatchRecordValidator {
    pub fn new(availability: Arc<CurrencyAvailability>) -> Self {
        Self { availability }
    }

    /// Validates line `line_number` (1-indexed).
    pub fn parse(&self, line_number: usize, line: &str) -> Result<ExchangeRequest, ValidationError> {
        let reject = |kind| ValidationError::new(kind, line_number, line);

        let fields = split_fields(line);
        let [source, amount, target, date] = fields.as_slice() else {
            return Err(reject(ErrorKind::InvalidLineFormat));
        };

        let amount_value = parse_amount(amount).ok_or_else(|| reject(ErrorKind::InvalidAmount))?;
        let date_value = parse_date(date).ok_or_else(|| reject(ErrorKind::InvalidDateFormat))?;

        let source_currency = CurrencyCode::new(source);
        if !self.availability.is_available(&source_currency, date_value) {
            return Err(reject(ErrorKind::InvalidSourceCurrency));
        }

        let target_currency = self
            .resolve_target(target, date_value)
            .ok_or_else(|| reject(ErrorKind::InvalidTargetCurrency))?;

        Ok(ExchangeRequest {
            source_currency,
            amount: amount_value,
            target_currency,
            date: date_value,
            raw: RawRecord {
                source: source.to_string(),
                amount: amount.to_string(),
                target: target.to_string(),
                date: date.to_string(),
            },
        })
    }

    /// `Some(None)` for PLN or an empty field, `Some(Some(code))` for an
    /// available foreign currency, `None` otherwise.
    fn resolve_target(&self, target: &str, date: NaiveDate) -> Option<Option<CurrencyCode>> {
        let code = CurrencyCode::new(target);
        if code.is_empty() || code.is_base() {
            return Some(None);
        }
        self.availability
            .is_available(&code, date)
            .then_some(Some(code))
    }
}

impl Default for BatchRecordValidator {
    fn default() -> Self {
        Self::new(Arc::new(CurrencyAvailability::historical()))
    }
}

/// Splits on single spaces. Trailing empty fields are dropped; interior ones
/// are kept so `USD 100  27-12-23` still has an (empty) target.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(' ').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Plain decimal or scientific notation. Digit separators are not numbers
/// here, and neither is anything outside `Decimal`'s 28-digit range.
fn parse_amount(token: &str) -> Option<Decimal> {
    let token = token.trim();
    if token.contains('_') {
        return None;
    }
    Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .ok()
        .filter(|amount| *amount > Decimal::ZERO)
}

/// `dd-MM-yy` with exactly two digits per field, years 2000-2099.
///
/// Days up to 31 are accepted in every month and resolve to the month's
/// last day when they run past it, so `31-02-24` is 2024-02-29.
fn parse_date(token: &str) -> Option<NaiveDate> {
    let bytes = token.as_bytes();
    if bytes.len() != 8 || bytes[2] != b'-' || bytes[5] != b'-' {
        return None;
    }

    let number = |start: usize| -> Option<u32> {
        let digits = token.get(start..start + 2)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    };

    let day = number(0)?;
    let month = number(3)?;
    let year = 2000 + number(6)? as i32;
    if !(1..=31).contains(&day) {
        return None;
    }

    (day.min(28)..=day)
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
}
