//! # Exchange Types
//!
//! Domain types and port traits for the batch exchange pipeline.
//! This crate has ZERO IO dependencies - only data structures,
//! error taxonomy, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Parsed requests and batch outcomes
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Per-line, file-level and single-exchange error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{BatchOutcome, ExchangeRequest, RawRecord};
pub use error::{ErrorKind, ExchangeError, IngestionError, ValidationError};
pub use exchange_rates::{
    BASE_CURRENCY, CalculationError, CurrencyAvailability, CurrencyCode, ExchangeCalculator,
    ExchangeResult, GoldComparison, GoldPrice, Quote, round_amount,
};
pub use ports::{GoldPriceError, GoldPriceProvider, QuoteError, RateProvider};
