//! Gold prices and the best-price comparison.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holidays::is_trading_day;

/// NBP gold price for one day, in PLN per gram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldPrice {
    date: NaiveDate,
    price: Decimal,
}

impl GoldPrice {
    pub fn new(date: NaiveDate, price: Decimal) -> Self {
        Self { date, price }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// The latest price in a range set against the best price of that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoldComparison {
    pub current: GoldPrice,
    pub best: Decimal,
    /// `current - best`; never positive unless the latest price is excluded
    /// from `best`.
    pub gain_or_loss: Decimal,
}

impl GoldComparison {
    /// Compares the latest price in `prices` with the best one.
    ///
    /// When `end` is a trading day the latest entry is that day's price, so
    /// it is left out of the best-price search. On weekends and holidays, or
    /// with a single price, every entry counts.
    ///
    /// Returns `None` for an empty series.
    pub fn from_prices(prices: &[GoldPrice], end: NaiveDate) -> Option<Self> {
        let mut sorted = prices.to_vec();
        sorted.sort_by_key(|p| std::cmp::Reverse(p.date));
        let current = *sorted.first()?;

        let skip = usize::from(is_trading_day(end) && sorted.len() > 1);
        let best = sorted.iter().skip(skip).map(|p| p.price).max()?;

        Some(Self {
            current,
            best,
            gain_or_loss: current.price - best,
        })
    }
}
