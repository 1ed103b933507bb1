//! Exchange Rates Library
//!
//! Pure currency arithmetic and reference data for the batch exchange
//! pipeline. Nothing in this crate performs IO: quotes come in from a
//! provider, converted amounts go out.
//!
//! - `currency` - normalized currency codes and the base currency (PLN)
//! - `quote` - immutable bid/ask quotes denominated in the base currency
//! - `availability` - which codes can be quoted in which calendar year
//! - `calculator` - conversion through the base currency with controlled rounding
//! - `gold` - gold prices and the best-price comparison
//! - `holidays` - Polish public holidays and trading days
//!
//! # Example
//! ```
//! use chrono::NaiveDate;
//! use exchange_rates::{CurrencyCode, ExchangeCalculator, Quote};
//! use rust_decimal::Decimal;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 12, 27).unwrap();
//! let usd = Quote::new(
//!     CurrencyCode::new("USD"),
//!     Decimal::new(390, 2),
//!     Decimal::new(400, 2),
//!     date,
//! );
//!
//! // No target quote: the amount is settled in PLN.
//! let converted = ExchangeCalculator::convert(&usd, Decimal::from(100), None).unwrap();
//! assert_eq!(converted.ask, Decimal::new(4000000, 4));
//! ```

pub mod availability;
pub mod calculator;
pub mod currency;
pub mod gold;
pub mod holidays;
pub mod quote;

pub use availability::{AvailabilityError, AvailabilityWindow, CurrencyAvailability};
pub use calculator::{
    CalculationError, ConvertedAmounts, ExchangeCalculator, ExchangeResult, RESULT_SCALE,
    round_amount,
};
pub use currency::{BASE_CURRENCY, CurrencyCode};
pub use gold::{GoldComparison, GoldPrice};
pub use holidays::{is_holiday, is_trading_day};
pub use quote::Quote;
