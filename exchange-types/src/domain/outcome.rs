//! Accumulated result of one batch run.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Results keyed by composite key plus diagnostics in line order.
///
/// Owned by a single ingestion call. Results are kept in a sorted map so two
/// runs over the same file compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Composite key -> ask amount.
    pub results: BTreeMap<String, Decimal>,
    pub errors: Vec<String>,
}

impl BatchOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an ask amount. A repeated key replaces the earlier value.
    pub fn record_result(&mut self, key: String, ask: Decimal) {
        self.results.insert(key, ask);
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Results with a non-zero amount, in key order.
    pub fn non_zero_results(&self) -> impl Iterator<Item = (&String, &Decimal)> {
        self.results.iter().filter(|(_, ask)| !ask.is_zero())
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
