//! Batch Ingestion Engine
//!
//! Reads a batch file and runs every line through validation, quoting and
//! calculation. A failing line becomes a diagnostic; it never stops the
//! batch. Only file-level problems abort, and they do so before line 1.

use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use exchange_types::{
    BatchOutcome, CurrencyAvailability, ExchangeError, ExchangeRequest, ExchangeResult,
    IngestionError, RateProvider,
};

use crate::exchange::quote_and_convert;
use crate::validator::BatchRecordValidator;

/// Orchestrates validator -> provider -> calculator for every line.
///
/// Generic over `P: RateProvider` - the quote source is injected.
/// Lines are handled strictly in order; each provider call finishes before
/// the next line starts.
pub struct BatchIngestionEngine<P: RateProvider> {
    provider: P,
    validator: BatchRecordValidator,
}

impl<P: RateProvider> BatchIngestionEngine<P> {
    /// Creates an engine using the historical availability table.
    pub fn new(provider: P) -> Self {
        Self::with_availability(provider, Arc::new(CurrencyAvailability::historical()))
    }

    pub fn with_availability(provider: P, availability: Arc<CurrencyAvailability>) -> Self {
        Self {
            provider,
            validator: BatchRecordValidator::new(availability),
        }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Ingests the batch file at `path`.
    ///
    /// Fails with [`IngestionError`] if the file is missing, empty, not a
    /// `.csv` file, or cannot be read as text.
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    pub async fn ingest(&self, path: &Path) -> Result<BatchOutcome, IngestionError> {
        let content = read_source(path).await?;
        Ok(self.ingest_str(&content).await)
    }

    /// Runs the per-line loop over in-memory content.
    pub async fn ingest_str(&self, content: &str) -> BatchOutcome {
        let mut outcome = BatchOutcome::new();
        let mut lines = 0usize;

        for (index, line) in content.lines().enumerate() {
            lines += 1;
            self.process_line(index + 1, line, &mut outcome).await;
        }

        info!(
            lines,
            results = outcome.results.len(),
            errors = outcome.errors.len(),
            "batch processed"
        );
        outcome
    }

    async fn process_line(&self, line_number: usize, line: &str, outcome: &mut BatchOutcome) {
        let request = match self.validator.parse(line_number, line) {
            Ok(request) => request,
            Err(err) => {
                debug!(line = line_number, kind = %err.kind, "line rejected");
                outcome.record_error(err.to_string());
                return;
            }
        };

        let key = request.composite_key();
        match self.convert(&request).await {
            Ok(result) => {
                debug!(line = line_number, %key, ask = %result.ask, "line converted");
                outcome.record_result(key, result.ask);
            }
            Err(ExchangeError::Quote(err)) => {
                warn!(line = line_number, error = %err, "quote lookup failed");
                outcome.record_error(format!("ExchangeRateCalculationError: {}: {}", err, line));
                // Zero placeholder: the key stays visible in the results.
                outcome.record_result(key, Decimal::ZERO);
            }
            Err(err) => {
                warn!(line = line_number, error = %err, "conversion failed");
                outcome.record_error(format!("ExchangeRateCalculationError: {}: {}", err, line));
            }
        }
    }

    async fn convert(&self, request: &ExchangeRequest) -> Result<ExchangeResult, ExchangeError> {
        quote_and_convert(
            &self.provider,
            &request.source_currency,
            request.amount,
            request.target_currency.as_ref(),
            request.date,
        )
        .await
    }
}

/// File checks in order: exists, non-empty, `.csv` extension, UTF-8 text.
async fn read_source(path: &Path) -> Result<String, IngestionError> {
    let unreadable = |source| IngestionError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    ensure_exists(path, tokio::fs::try_exists(path).await)?;

    let metadata = tokio::fs::metadata(path).await.map_err(unreadable)?;
    if metadata.len() == 0 {
        return Err(IngestionError::FileEmpty(path.to_path_buf()));
    }

    if !has_csv_extension(path) {
        return Err(IngestionError::WrongExtension(path.to_path_buf()));
    }

    tokio::fs::read_to_string(path).await.map_err(unreadable)
}

/// `Ok(false)` is a missing file; an error (e.g. a parent directory that
/// cannot be searched) means existence is unknown, so the file is unreadable.
pub(crate) fn ensure_exists(path: &Path, exists: std::io::Result<bool>) -> Result<(), IngestionError> {
    match exists {
        Ok(true) => Ok(()),
        Ok(false) => Err(IngestionError::FileMissing(path.to_path_buf())),
        Err(source) => Err(IngestionError::Unreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
