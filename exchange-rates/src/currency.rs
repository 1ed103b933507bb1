//! Currency codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The settlement currency every quote is denominated in.
pub const BASE_CURRENCY: &str = "PLN";

/// ISO-4217 style currency code, normalized to upper case.
///
/// Codes are compared case-insensitively everywhere in the pipeline, so the
/// normalization happens once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a code from user input, trimming and upper-casing it.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    /// Returns the base currency code.
    pub fn base() -> Self {
        Self(BASE_CURRENCY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for PLN.
    pub fn is_base(&self) -> bool {
        self.0 == BASE_CURRENCY
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_normalized() {
        assert_eq!(CurrencyCode::new(" usd ").as_str(), "USD");
        assert_eq!(CurrencyCode::new("usd"), CurrencyCode::new("USD"));
    }

    #[test]
    fn test_base_currency() {
        assert!(CurrencyCode::new("pln").is_base());
        assert!(CurrencyCode::base().is_base());
        assert!(!CurrencyCode::new("EUR").is_base());
    }

    #[test]
    fn test_deserialize_normalizes() {
        let code: CurrencyCode = serde_json::from_str("\"chf\"").unwrap();
        assert_eq!(code.to_string(), "CHF");
    }
}
