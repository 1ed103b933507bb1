//! Error types for the exchange pipeline.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::ports::QuoteError;
use exchange_rates::{CalculationError, CurrencyCode};

/// Why a batch line was rejected before any quote was fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidLineFormat,
    InvalidAmount,
    InvalidDateFormat,
    InvalidSourceCurrency,
    InvalidTargetCurrency,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A rejected batch line.
///
/// The display form is the diagnostic recorded in the batch outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {line_number}: {raw_line}")]
pub struct ValidationError {
    pub kind: ErrorKind,
    /// 1-indexed.
    pub line_number: usize,
    pub raw_line: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, line_number: usize, raw_line: impl Into<String>) -> Self {
        Self {
            kind,
            line_number,
            raw_line: raw_line.into(),
        }
    }
}

/// File-level failures. Any of these aborts the batch before line 1.
#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("File does not exist: {}", .0.display())]
    FileMissing(PathBuf),

    #[error("File is empty: {}", .0.display())]
    FileEmpty(PathBuf),

    #[error("Invalid file format, expected a .csv file: {}", .0.display())]
    WrongExtension(PathBuf),

    #[error("Cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from a single, non-batch conversion.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("Amount must be a positive number")]
    NonPositiveAmount,

    #[error("Date {date} is outside the supported range {earliest} to {latest}")]
    DateOutOfRange {
        date: NaiveDate,
        earliest: NaiveDate,
        latest: NaiveDate,
    },

    #[error("Currency {currency} is not available on {date}")]
    CurrencyUnavailable {
        currency: CurrencyCode,
        date: NaiveDate,
    },

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Calculation(#[from] CalculationError),
}
