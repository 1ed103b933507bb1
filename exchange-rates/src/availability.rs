//! Currency availability by calendar year.
//!
//! The rate table does not quote every currency for every year: EEK was
//! dropped when Estonia joined the euro, and nothing is published before
//! 2003. The lookup is a list of year windows, each carrying its own code set.
//! The first window containing a year wins.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

const SINCE_2011: &[&str] = &[
    "USD", "AUD", "CAD", "EUR", "HUF", "CHF", "GBP", "JPY", "CZK", "DKK", "NOK", "SEK", "XDR",
];

const FROM_2003_TO_2010: &[&str] = &[
    "USD", "AUD", "CAD", "EUR", "HUF", "CHF", "GBP", "JPY", "CZK", "DKK", "EEK", "NOK", "SEK",
    "XDR",
];

/// Error raised while building an availability table.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    #[error("Invalid availability table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid year window: {from_year} is after {to_year}")]
    InvalidWindow { from_year: i32, to_year: i32 },
}

/// One year range and the codes quoted within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub from_year: i32,
    /// Inclusive upper bound; `None` means open-ended.
    #[serde(default)]
    pub to_year: Option<i32>,
    pub currencies: Vec<CurrencyCode>,
}

impl AvailabilityWindow {
    fn contains(&self, year: i32) -> bool {
        year >= self.from_year && self.to_year.is_none_or(|to| year <= to)
    }

    fn from_codes(from_year: i32, to_year: Option<i32>, codes: &[&str]) -> Self {
        Self {
            from_year,
            to_year,
            currencies: codes.iter().map(|c| CurrencyCode::new(c)).collect(),
        }
    }
}

/// Year-keyed lookup of the currencies a provider can quote.
///
/// Built once and shared by every validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAvailability {
    windows: Vec<AvailabilityWindow>,
}

impl CurrencyAvailability {
    /// Builds a table from explicit windows.
    pub fn new(windows: Vec<AvailabilityWindow>) -> Result<Self, AvailabilityError> {
        for window in &windows {
            if let Some(to_year) = window.to_year {
                if to_year < window.from_year {
                    return Err(AvailabilityError::InvalidWindow {
                        from_year: window.from_year,
                        to_year,
                    });
                }
            }
        }
        Ok(Self { windows })
    }

    /// The published table: 2011 onward, 2003 through 2010, nothing earlier.
    pub fn historical() -> Self {
        Self {
            windows: vec![
                AvailabilityWindow::from_codes(2011, None, SINCE_2011),
                AvailabilityWindow::from_codes(2003, Some(2010), FROM_2003_TO_2010),
            ],
        }
    }

    /// Parses a JSON array of windows.
    ///
    /// ```json
    /// [{"from_year": 2011, "to_year": null, "currencies": ["USD", "EUR"]}]
    /// ```
    pub fn from_json(json: &str) -> Result<Self, AvailabilityError> {
        let windows: Vec<AvailabilityWindow> = serde_json::from_str(json)?;
        Self::new(windows)
    }

    pub fn windows(&self) -> &[AvailabilityWindow] {
        &self.windows
    }

    /// Codes quoted in the given year. Empty when no window covers it.
    pub fn codes_for_year(&self, year: i32) -> &[CurrencyCode] {
        self.windows
            .iter()
            .find(|w| w.contains(year))
            .map(|w| w.currencies.as_slice())
            .unwrap_or(&[])
    }

    pub fn codes_for(&self, date: NaiveDate) -> &[CurrencyCode] {
        self.codes_for_year(date.year())
    }

    pub fn is_available(&self, code: &CurrencyCode, date: NaiveDate) -> bool {
        self.codes_for(date).contains(code)
    }
}

impl Default for CurrencyAvailability {
    fn default() -> Self {
        Self::historical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_eek_only_before_2011() {
        let table = CurrencyAvailability::historical();
        let eek = CurrencyCode::new("EEK");
        assert!(table.is_available(&eek, date(2010, 12, 31)));
        assert!(!table.is_available(&eek, date(2011, 1, 3)));
    }

    #[test]
    fn test_nothing_before_2003() {
        let table = CurrencyAvailability::historical();
        assert!(table.codes_for(date(2002, 12, 31)).is_empty());
        assert!(!table.is_available(&CurrencyCode::new("USD"), date(2002, 6, 1)));
        assert!(table.is_available(&CurrencyCode::new("USD"), date(2003, 1, 2)));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = CurrencyAvailability::historical();
        assert!(table.is_available(&CurrencyCode::new("chf"), date(2024, 2, 12)));
        assert!(!table.is_available(&CurrencyCode::new("SSS"), date(2024, 2, 12)));
    }

    #[test]
    fn test_base_currency_is_not_quoted() {
        let table = CurrencyAvailability::historical();
        assert!(!table.is_available(&CurrencyCode::base(), date(2024, 1, 16)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"from_year": 2020, "currencies": ["usd", "EUR"]},
            {"from_year": 2003, "to_year": 2019, "currencies": ["USD"]}
        ]"#;
        let table = CurrencyAvailability::from_json(json).unwrap();
        assert!(table.is_available(&CurrencyCode::new("EUR"), date(2024, 1, 1)));
        assert!(!table.is_available(&CurrencyCode::new("EUR"), date(2019, 1, 1)));
        assert_eq!(table.windows().len(), 2);
    }

    #[test]
    fn test_from_json_rejects_inverted_window() {
        let json = r#"[{"from_year": 2020, "to_year": 2010, "currencies": []}]"#;
        let result = CurrencyAvailability::from_json(json);
        assert!(matches!(
            result,
            Err(AvailabilityError::InvalidWindow {
                from_year: 2020,
                to_year: 2010
            })
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            CurrencyAvailability::from_json("{not json"),
            Err(AvailabilityError::Json(_))
        ));
    }
}
