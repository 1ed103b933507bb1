//! Cross-rate calculator.
//!
//! Every quote is denominated in PLN, so converting into PLN is a single
//! multiplication and converting into any other currency goes through PLN:
//! `amount * source / target`. Rounding happens once, on the finished value.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::quote::Quote;

/// Number of decimal places kept in converted amounts.
pub const RESULT_SCALE: u32 = 4;

/// Contract violations and arithmetic failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Quote for {0} has a zero rate")]
    ZeroRate(CurrencyCode),

    #[error("Arithmetic overflow while converting {0}")]
    Overflow(CurrencyCode),
}

/// Bid and ask amounts produced by a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedAmounts {
    pub bid: Decimal,
    pub ask: Decimal,
}

/// A finished conversion. Built fresh for every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeResult {
    pub source_currency: CurrencyCode,
    pub target_currency: CurrencyCode,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub bid: Decimal,
    pub ask: Decimal,
}

/// Rounds half-up to [`RESULT_SCALE`] places and pads to that scale.
pub fn round_amount(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(RESULT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(RESULT_SCALE);
    rounded
}

/// Stateless conversion through the base currency.
pub struct ExchangeCalculator;

impl ExchangeCalculator {
    /// Converts `amount` of the source currency.
    ///
    /// With no target quote the result is in PLN. With a target quote the
    /// bid leg divides by the target bid and the ask leg by the target ask.
    pub fn convert(
        source: &Quote,
        amount: Decimal,
        target: Option<&Quote>,
    ) -> Result<ConvertedAmounts, CalculationError> {
        if source.currency().is_empty() {
            return Err(CalculationError::InvalidArgument(
                "Source currency must not be empty".into(),
            ));
        }
        if amount <= Decimal::ZERO {
            return Err(CalculationError::InvalidArgument(
                "Amount must be a positive number".into(),
            ));
        }

        let bid = Self::leg(source, source.bid(), amount, target.map(|t| (t, t.bid())))?;
        let ask = Self::leg(source, source.ask(), amount, target.map(|t| (t, t.ask())))?;

        Ok(ConvertedAmounts {
            bid: round_amount(bid),
            ask: round_amount(ask),
        })
    }

    /// Converts and packages the outcome with its request data.
    pub fn exchange(
        source: &Quote,
        amount: Decimal,
        target: Option<&Quote>,
        date: NaiveDate,
    ) -> Result<ExchangeResult, CalculationError> {
        let converted = Self::convert(source, amount, target)?;
        Ok(ExchangeResult {
            source_currency: source.currency().clone(),
            target_currency: target
                .map(|t| t.currency().clone())
                .unwrap_or_else(CurrencyCode::base),
            amount,
            date,
            bid: converted.bid,
            ask: converted.ask,
        })
    }

    fn leg(
        source: &Quote,
        source_rate: Decimal,
        amount: Decimal,
        target: Option<(&Quote, Decimal)>,
    ) -> Result<Decimal, CalculationError> {
        let in_base = source_rate
            .checked_mul(amount)
            .ok_or_else(|| CalculationError::Overflow(source.currency().clone()))?;

        match target {
            None => Ok(in_base),
            Some((quote, rate)) => {
                if rate.is_zero() {
                    return Err(CalculationError::ZeroRate(quote.currency().clone()));
                }
                in_base
                    .checked_div(rate)
                    .ok_or_else(|| CalculationError::Overflow(quote.currency().clone()))
            }
        }
    }
}
