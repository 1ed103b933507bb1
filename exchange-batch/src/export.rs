//! CSV export of single conversions.
//!
//! One file per day, `exchange_results_{yyyyMMdd}.csv`, rows appended in
//! call order. A row identical to one already in the file is not written
//! twice.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use exchange_types::ExchangeResult;

pub const EXPORT_HEADER: [&str; 6] = [
    "SourceCurrency",
    "Amount",
    "TargetCurrency",
    "Date",
    "Bid",
    "Ask",
];

/// Error type for export operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Appends conversion results to dated CSV files in one directory.
#[derive(Debug, Clone)]
pub struct ResultExporter {
    dir: PathBuf,
}

impl ResultExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the export file for `day`.
    pub fn file_for(&self, day: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("exchange_results_{}.csv", day.format("%Y%m%d")))
    }

    /// Appends `result` to today's file.
    ///
    /// Returns `false` when an identical row is already present.
    pub fn save(&self, result: &ExchangeResult, today: NaiveDate) -> Result<bool, ExportError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.file_for(today);

        let fields = row_fields(result);
        let row = render_row(&fields)?;

        let existing = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        };
        let needs_header = existing.trim().is_empty();

        if !needs_header
            && existing
                .lines()
                .any(|line| line.trim().eq_ignore_ascii_case(row.trim()))
        {
            tracing::debug!(path = %path.display(), "row already exported");
            return Ok(false);
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            writer.write_record(EXPORT_HEADER)?;
        }
        writer.write_record(&fields)?;
        writer.flush()?;

        tracing::info!(path = %path.display(), "result exported");
        Ok(true)
    }
}

fn row_fields(result: &ExchangeResult) -> [String; 6] {
    [
        result.source_currency.to_string(),
        fixed(result.amount, 2),
        result.target_currency.to_string(),
        result.date.format("%Y-%m-%d").to_string(),
        fixed(result.bid, 4),
        fixed(result.ask, 4),
    ]
}

fn render_row(fields: &[String; 6]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(fields)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Half-up rounding padded to exactly `dp` places.
fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}
