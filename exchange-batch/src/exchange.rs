//! Single conversions.
//!
//! Also hosts the quote-then-calculate step shared with the batch engine.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use exchange_types::{
    CurrencyAvailability, CurrencyCode, ExchangeCalculator, ExchangeError, ExchangeResult,
    RateProvider,
};

/// First date the rate table has quotes for.
pub fn earliest_quote_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2003, 1, 2).unwrap_or(NaiveDate::MIN)
}

/// Fetches the source quote, the target quote when the target is not PLN,
/// and converts. Calls are made one after another.
pub(crate) async fn quote_and_convert<P: RateProvider + ?Sized>(
    provider: &P,
    source: &CurrencyCode,
    amount: Decimal,
    target: Option<&CurrencyCode>,
    date: NaiveDate,
) -> Result<ExchangeResult, ExchangeError> {
    let source_quote = provider.get_quote(source, date).await?;
    let target_quote = match target {
        Some(code) => Some(provider.get_quote(code, date).await?),
        None => None,
    };

    let result = ExchangeCalculator::exchange(&source_quote, amount, target_quote.as_ref(), date)?;
    Ok(result)
}

/// Application service for one-off conversions.
pub struct SingleExchangeService<P: RateProvider> {
    provider: P,
    availability: Arc<CurrencyAvailability>,
}

impl<P: RateProvider> SingleExchangeService<P> {
    pub fn new(provider: P, availability: Arc<CurrencyAvailability>) -> Self {
        Self {
            provider,
            availability,
        }
    }

    /// Converts `amount` of `source` into `target` (PLN when `None`) on `date`.
    ///
    /// `today` bounds the accepted date range from above.
    pub async fn exchange(
        &self,
        source: &CurrencyCode,
        amount: Decimal,
        target: Option<&CurrencyCode>,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<ExchangeResult, ExchangeError> {
        if amount <= Decimal::ZERO {
            return Err(ExchangeError::NonPositiveAmount);
        }

        let earliest = earliest_quote_date();
        if date < earliest || date > today {
            return Err(ExchangeError::DateOutOfRange {
                date,
                earliest,
                latest: today,
            });
        }

        self.ensure_available(source, date)?;
        let target = target.filter(|code| !code.is_empty() && !code.is_base());
        if let Some(code) = target {
            self.ensure_available(code, date)?;
        }

        tracing::debug!(%source, %amount, ?target, %date, "single exchange");
        quote_and_convert(&self.provider, source, amount, target, date).await
    }

    fn ensure_available(&self, code: &CurrencyCode, date: NaiveDate) -> Result<(), ExchangeError> {
        if self.availability.is_available(code, date) {
            Ok(())
        } else {
            Err(ExchangeError::CurrencyUnavailable {
                currency: code.clone(),
                date,
            })
        }
    }
}
