//! Gold price provider port.

use std::sync::Arc;

use chrono::NaiveDate;
use exchange_rates::GoldPrice;

/// Error type for gold price lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoldPriceError {
    #[error("No gold prices available between {start} and {end}")]
    NotFound { start: NaiveDate, end: NaiveDate },

    #[error("Data series has been exceeded. Maximum range between two dates can be 367 days")]
    RangeTooLong,

    #[error("Invalid date range: {start} to {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Port trait for gold price sources.
#[async_trait::async_trait]
pub trait GoldPriceProvider: Send + Sync {
    /// Get every published price between `start` and `end` inclusive.
    async fn get_prices(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<GoldPrice>, GoldPriceError>;
}

#[async_trait::async_trait]
impl<P: GoldPriceProvider + ?Sized> GoldPriceProvider for Arc<P> {
    async fn get_prices(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<GoldPrice>, GoldPriceError> {
        (**self).get_prices(start, end).await
    }
}
