//! Integration tests for file ingestion.
//!
//! These tests exercise the file-level checks that run before any line is
//! read, plus a full batch file on disk.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

use exchange_batch::BatchIngestionEngine;
use exchange_types::{CurrencyCode, IngestionError, Quote, QuoteError, RateProvider};

/// Every currency quotes bid 3.90 / ask 4.00 on every date.
struct FlatProvider;

#[async_trait]
impl RateProvider for FlatProvider {
    async fn get_quote(&self, currency: &CurrencyCode, date: NaiveDate) -> Result<Quote, QuoteError> {
        Ok(Quote::new(currency.clone(), dec!(3.90), dec!(4.00), date))
    }
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
async fn test_full_batch_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "batch.csv",
        "USD 100 PLN 27-12-23\r\nUSD 100 EUR 27-12-23\r\nSSS 100 CHF 12-02-24\r\n",
    );

    let engine = BatchIngestionEngine::new(FlatProvider);
    let outcome = engine.ingest(&path).await.unwrap();

    assert_eq!(outcome.results["USD_100_PLN_27-12-23"], dec!(400.0000));
    assert_eq!(outcome.results["USD_100_EUR_27-12-23"], dec!(100.0000));
    assert_eq!(
        outcome.errors,
        vec!["InvalidSourceCurrency at line 3: SSS 100 CHF 12-02-24"]
    );
}

#[tokio::test]
async fn test_extension_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "BATCH.CSV", "USD 1 PLN 27-12-23\n");

    let outcome = BatchIngestionEngine::new(FlatProvider)
        .ingest(&path)
        .await
        .unwrap();
    assert_eq!(outcome.results.len(), 1);
}

#[tokio::test]
async fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nonExistingFile.csv");

    let result = BatchIngestionEngine::new(FlatProvider).ingest(&path).await;
    assert!(matches!(result, Err(IngestionError::FileMissing(p)) if p == path));
}

#[tokio::test]
async fn test_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "emptyFile.csv", "");

    let result = BatchIngestionEngine::new(FlatProvider).ingest(&path).await;
    assert!(matches!(result, Err(IngestionError::FileEmpty(_))));
}

#[tokio::test]
async fn test_wrong_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "fileWithInvalidFormat.txt", "USD 100 PLN 27-12-23\n");

    let result = BatchIngestionEngine::new(FlatProvider).ingest(&path).await;
    assert!(matches!(result, Err(IngestionError::WrongExtension(_))));
}

#[tokio::test]
async fn test_empty_check_runs_before_extension_check() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "empty.txt", "");

    let result = BatchIngestionEngine::new(FlatProvider).ingest(&path).await;
    assert!(matches!(result, Err(IngestionError::FileEmpty(_))));
}

#[tokio::test]
async fn test_non_utf8_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.csv");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let result = BatchIngestionEngine::new(FlatProvider).ingest(&path).await;
    assert!(matches!(result, Err(IngestionError::Unreadable { .. })));
}

#[tokio::test]
async fn test_blank_line_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "blank.csv", "\nUSD 1 PLN 27-12-23\n");

    let outcome = BatchIngestionEngine::new(FlatProvider)
        .ingest(&path)
        .await
        .unwrap();
    assert_eq!(outcome.errors, vec!["InvalidLineFormat at line 1: "]);
    assert_eq!(outcome.results.len(), 1);
}
