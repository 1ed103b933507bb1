//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use exchange_client::{DEFAULT_BASE_URL, NbpClient};
use exchange_types::CurrencyAvailability;

/// Application configuration.
pub struct Config {
    pub api_url: String,
    pub request_timeout: Duration,
    pub export_dir: PathBuf,
    pub availability_file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = env::var("NBP_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        if api_url.trim().is_empty() {
            anyhow::bail!("NBP_API_URL must not be empty");
        }

        let timeout_secs: u64 = env::var("NBP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("NBP_TIMEOUT_SECS must be a whole number of seconds"))?;

        let export_dir = env::var("EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("exports"));

        let availability_file = env::var("CURRENCY_AVAILABILITY_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_url,
            request_timeout: Duration::from_secs(timeout_secs),
            export_dir,
            availability_file,
        })
    }

    /// NBP client with the configured request timeout.
    pub fn nbp_client(&self) -> anyhow::Result<NbpClient> {
        let http = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()?;
        Ok(NbpClient::new(&self.api_url).with_http_client(http))
    }

    /// Loads the availability table once for the whole run.
    pub fn availability(&self) -> anyhow::Result<Arc<CurrencyAvailability>> {
        let table = match &self.availability_file {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    anyhow::anyhow!("Cannot read availability file {}: {}", path.display(), e)
                })?;
                CurrencyAvailability::from_json(&json)?
            }
            None => CurrencyAvailability::historical(),
        };
        Ok(Arc::new(table))
    }
}
