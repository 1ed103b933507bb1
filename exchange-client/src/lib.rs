//! # Exchange Client
//!
//! `RateProvider` and `GoldPriceProvider` adapter for the NBP (Narodowy Bank
//! Polski) API. Quotes come from exchange rate table C, which publishes
//! bid/ask prices in PLN; gold prices are PLN per gram.

use std::str::FromStr;

use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;

use exchange_types::{
    CurrencyCode, GoldPrice, GoldPriceError, GoldPriceProvider, Quote, QuoteError, RateProvider,
};

/// Public NBP API root.
pub const DEFAULT_BASE_URL: &str = "https://api.nbp.pl/api";

/// Body of `GET rates/C/{code}/{date}/`.
#[derive(Debug, Deserialize)]
struct TableCResponse {
    code: String,
    rates: Vec<TableCRate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableCRate {
    effective_date: NaiveDate,
    bid: f64,
    ask: f64,
}

/// One element of `GET cenyzlota/{start}/{end}/`.
#[derive(Debug, Deserialize)]
struct GoldRate {
    #[serde(rename = "data")]
    date: NaiveDate,
    #[serde(rename = "cena")]
    price: f64,
}

/// NBP API client.
pub struct NbpClient {
    base_url: String,
    http: Client,
}

impl NbpClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Uses a preconfigured `reqwest` client (timeouts, proxies).
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    fn quote_url(&self, currency: &CurrencyCode, date: NaiveDate) -> String {
        format!(
            "{}/exchangerates/rates/C/{}/{}/?format=json",
            self.base_url,
            currency.as_str().to_lowercase(),
            date.format("%Y-%m-%d")
        )
    }

    fn gold_url(&self, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/cenyzlota/{}/{}/?format=json",
            self.base_url,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        )
    }

    async fn fetch(&self, url: &str) -> Result<(StatusCode, String), reqwest::Error> {
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok((status, body))
    }
}

impl Default for NbpClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl RateProvider for NbpClient {
    #[tracing::instrument(skip(self), fields(currency = %currency, date = %date))]
    async fn get_quote(&self, currency: &CurrencyCode, date: NaiveDate) -> Result<Quote, QuoteError> {
        let (status, body) = self
            .fetch(&self.quote_url(currency, date))
            .await
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        map_status(status, currency, date)?;
        parse_quote(&body, currency, date)
    }
}

#[async_trait::async_trait]
impl GoldPriceProvider for NbpClient {
    #[tracing::instrument(skip(self), fields(start = %start, end = %end))]
    async fn get_prices(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<GoldPrice>, GoldPriceError> {
        let (status, body) = self
            .fetch(&self.gold_url(start, end))
            .await
            .map_err(|e| GoldPriceError::Transport(e.to_string()))?;

        map_gold_status(status, start, end)?;
        parse_gold_prices(&body, start, end)
    }
}

/// 404 is a missing quote, 400 an unknown currency; only 200 carries a body.
fn map_status(status: StatusCode, currency: &CurrencyCode, date: NaiveDate) -> Result<(), QuoteError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => Err(QuoteError::NotFound {
            currency: currency.clone(),
            date,
        }),
        StatusCode::BAD_REQUEST => Err(QuoteError::CurrencyUnsupported(currency.clone())),
        status => {
            tracing::error!(%status, "unexpected response from rate service");
            Err(QuoteError::Transport(unexpected(status)))
        }
    }
}

/// The gold endpoint answers 400 when the range exceeds 367 days.
fn map_gold_status(status: StatusCode, start: NaiveDate, end: NaiveDate) -> Result<(), GoldPriceError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => Err(GoldPriceError::NotFound { start, end }),
        StatusCode::BAD_REQUEST => Err(GoldPriceError::RangeTooLong),
        status => {
            tracing::error!(%status, "unexpected response from gold price service");
            Err(GoldPriceError::Transport(unexpected(status)))
        }
    }
}

fn unexpected(status: StatusCode) -> String {
    format!("unexpected HTTP status {}", status.as_u16())
}

/// Builds a quote from the first rate in a table C payload.
fn parse_quote(body: &str, currency: &CurrencyCode, date: NaiveDate) -> Result<Quote, QuoteError> {
    let response: TableCResponse = serde_json::from_str(body)
        .map_err(|e| QuoteError::Transport(format!("invalid response body: {}", e)))?;

    let rate = response.rates.first().ok_or_else(|| QuoteError::NotFound {
        currency: currency.clone(),
        date,
    })?;

    Ok(Quote::new(
        CurrencyCode::new(&response.code),
        to_decimal(rate.bid)?,
        to_decimal(rate.ask)?,
        rate.effective_date,
    ))
}

fn parse_gold_prices(body: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<GoldPrice>, GoldPriceError> {
    let rates: Vec<GoldRate> = serde_json::from_str(body)
        .map_err(|e| GoldPriceError::Transport(format!("invalid response body: {}", e)))?;
    if rates.is_empty() {
        return Err(GoldPriceError::NotFound { start, end });
    }

    rates
        .iter()
        .map(|rate| {
            to_decimal(rate.price)
                .map(|price| GoldPrice::new(rate.date, price))
                .map_err(|e| GoldPriceError::Transport(e.to_string()))
        })
        .collect()
}

/// Goes through the shortest decimal rendering, so `4.037` stays `4.037`.
fn to_decimal(value: f64) -> Result<Decimal, QuoteError> {
    Decimal::from_str(&value.to_string())
        .map_err(|e| QuoteError::Transport(format!("invalid rate {}: {}", value, e)))
}
