//! Gold price comparison.

use chrono::NaiveDate;
use tracing::debug;

use exchange_types::{GoldComparison, GoldPriceError, GoldPriceProvider};

/// Application service comparing the latest gold price with the best one in
/// a date range.
pub struct GoldService<P: GoldPriceProvider> {
    provider: P,
}

impl<P: GoldPriceProvider> GoldService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Compares prices published between `start` and `end`.
    ///
    /// `Ok(None)` means the range has no prices at all.
    pub async fn compare(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
    ) -> Result<Option<GoldComparison>, GoldPriceError> {
        if start > end || end > today {
            return Err(GoldPriceError::InvalidRange { start, end });
        }

        let prices = match self.provider.get_prices(start, end).await {
            Ok(prices) => prices,
            Err(GoldPriceError::NotFound { .. }) => {
                debug!(%start, %end, "no gold prices in range");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        Ok(GoldComparison::from_prices(&prices, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use exchange_types::GoldPrice;
    use rust_decimal_macros::dec;

    enum MockGold {
        Prices(Vec<GoldPrice>),
        Fails(GoldPriceError),
    }

    #[async_trait]
    impl GoldPriceProvider for MockGold {
        async fn get_prices(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<GoldPrice>, GoldPriceError> {
            match self {
                MockGold::Prices(prices) => Ok(prices
                    .iter()
                    .filter(|p| p.date() >= start && p.date() <= end)
                    .copied()
                    .collect()),
                MockGold::Fails(err) => Err(err.clone()),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march() -> MockGold {
        MockGold::Prices(vec![
            GoldPrice::new(date(2024, 2, 29), dec!(260.85)),
            GoldPrice::new(date(2024, 3, 1), dec!(262.10)),
            GoldPrice::new(date(2024, 3, 4), dec!(263.09)),
            GoldPrice::new(date(2024, 3, 5), dec!(268.59)),
            GoldPrice::new(date(2024, 3, 6), dec!(273.37)),
        ])
    }

    #[tokio::test]
    async fn test_compare_range() {
        let service = GoldService::new(march());
        let cmp = service
            .compare(date(2024, 2, 29), date(2024, 3, 6), date(2024, 3, 6))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cmp.gain_or_loss, dec!(4.78));
    }

    #[tokio::test]
    async fn test_month_to_date() {
        let service = GoldService::new(march());
        let cmp = service
            .compare(date(2024, 3, 1), date(2024, 3, 6), date(2024, 3, 7))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cmp.best, dec!(268.59));
    }

    #[tokio::test]
    async fn test_not_found_is_no_comparison() {
        let service = GoldService::new(MockGold::Fails(GoldPriceError::NotFound {
            start: date(2024, 3, 9),
            end: date(2024, 3, 10),
        }));
        let result = service
            .compare(date(2024, 3, 9), date(2024, 3, 10), date(2024, 3, 10))
            .await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_provider_errors_propagate() {
        let service = GoldService::new(MockGold::Fails(GoldPriceError::RangeTooLong));
        let result = service
            .compare(date(2022, 1, 1), date(2024, 3, 6), date(2024, 3, 6))
            .await;
        assert_eq!(result, Err(GoldPriceError::RangeTooLong));
    }

    #[tokio::test]
    async fn test_invalid_ranges() {
        let service = GoldService::new(march());
        let reversed = service
            .compare(date(2024, 3, 6), date(2024, 3, 1), date(2024, 3, 6))
            .await;
        assert!(matches!(reversed, Err(GoldPriceError::InvalidRange { .. })));

        let future = service
            .compare(date(2024, 3, 1), date(2024, 3, 8), date(2024, 3, 6))
            .await;
        assert!(matches!(future, Err(GoldPriceError::InvalidRange { .. })));
    }
}
