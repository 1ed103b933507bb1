//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The batch engine and the gold service depend on these traits, not concrete implementations.

mod gold_provider;
mod rate_provider;

pub use gold_provider::{GoldPriceError, GoldPriceProvider};
pub use rate_provider::{QuoteError, RateProvider};
