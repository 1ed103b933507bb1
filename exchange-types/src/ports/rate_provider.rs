//! Rate provider port.
//!
//! This trait defines the interface for quote sources.
//! Implementations can be HTTP clients, fixtures, mocks, etc.

use std::sync::Arc;

use chrono::NaiveDate;
use exchange_rates::{CurrencyCode, Quote};

/// Error type for quote lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("No data available for {currency} on {date}")]
    NotFound { currency: CurrencyCode, date: NaiveDate },

    #[error("Unsupported currency: {0}")]
    CurrencyUnsupported(CurrencyCode),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Port trait for quote providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Get the bid/ask quote of `currency` in PLN on `date`.
    async fn get_quote(&self, currency: &CurrencyCode, date: NaiveDate) -> Result<Quote, QuoteError>;
}

#[async_trait::async_trait]
impl<P: RateProvider + ?Sized> RateProvider for Arc<P> {
    async fn get_quote(&self, currency: &CurrencyCode, date: NaiveDate) -> Result<Quote, QuoteError> {
        (**self).get_quote(currency, date).await
    }
}
