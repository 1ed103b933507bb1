//! Exchange CLI
//!
//! Command-line interface for batch and single currency exchange and gold
//! price comparison. Wires configuration, logging, the NBP provider and the
//! application layer.

mod config;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exchange_batch::{BatchIngestionEngine, GoldService, ResultExporter, SingleExchangeService};
use exchange_types::CurrencyCode;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "exchange")]
#[command(author, version, about = "Currency exchange calculator backed by NBP quotes", long_about = None)]
struct Cli {
    /// Root URL of the NBP API
    #[arg(long, env = "NBP_API_URL")]
    api_url: Option<String>,

    /// Directory for exported single conversions
    #[arg(long, env = "EXPORT_DIR")]
    export_dir: Option<PathBuf>,

    /// JSON file overriding the currency availability table
    #[arg(long, env = "CURRENCY_AVAILABILITY_FILE")]
    availability: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a batch file of `SOURCE AMOUNT TARGET dd-MM-yy` lines
    Batch {
        /// Path to the .csv batch file
        file: PathBuf,
        /// Print the whole outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a single amount
    Convert {
        /// Source currency code
        #[arg(long)]
        from: String,
        /// Amount in the source currency
        #[arg(long, default_value = "1")]
        amount: Decimal,
        /// Target currency code (PLN when omitted)
        #[arg(long)]
        to: Option<String>,
        /// Quote date, yyyy-MM-dd (today when omitted)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Do not append the result to the export file
        #[arg(long)]
        no_save: bool,
    },
    /// List the currencies available on a date
    Currencies {
        /// yyyy-MM-dd (today when omitted)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Compare the latest gold price with the best price in a range
    Gold {
        /// Range start, yyyy-MM-dd (first day of the end month when omitted)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Range end, yyyy-MM-dd (today when omitted)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,exchange_batch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(dir) = cli.export_dir {
        config.export_dir = dir;
    }
    if let Some(path) = cli.availability {
        config.availability_file = Some(path);
    }

    let availability = config.availability()?;
    let client = config.nbp_client()?;
    let today = Local::now().date_naive();

    tracing::debug!(api_url = %config.api_url, "configuration loaded");

    match cli.command {
        Commands::Batch { file, json } => {
            let engine = BatchIngestionEngine::with_availability(client, availability);
            let outcome = engine.ingest(&file).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(());
            }

            if outcome.non_zero_results().next().is_some() {
                println!("Results based on data from the file:");
                for (key, ask) in outcome.non_zero_results() {
                    println!("{}: {}", key, ask);
                }
            }
            if outcome.has_errors() {
                println!("Errors encountered while processing the file:");
                for message in &outcome.errors {
                    println!("{}", message);
                }
            }
        }

        Commands::Convert {
            from,
            amount,
            to,
            date,
            no_save,
        } => {
            let source = CurrencyCode::new(&from);
            let target = to.map(CurrencyCode::from);
            let date = date.unwrap_or(today);

            let service = SingleExchangeService::new(client, availability);
            let result = service
                .exchange(&source, amount, target.as_ref(), date, today)
                .await?;

            println!(
                "{} {} {} {}: bid={}, ask={}",
                result.source_currency,
                result.amount,
                result.target_currency,
                result.date,
                result.bid,
                result.ask
            );

            if !no_save {
                let exporter = ResultExporter::new(&config.export_dir);
                if exporter.save(&result, today)? {
                    println!("Result saved to {}", exporter.file_for(today).display());
                }
            }
        }

        Commands::Currencies { date } => {
            let date = date.unwrap_or(today);
            let codes = availability.codes_for(date);
            if codes.is_empty() {
                println!("No currencies are quoted on {}", date);
            }
            for code in codes {
                println!("{}", code);
            }
        }

        Commands::Gold { from, to } => {
            let end = to.unwrap_or(today);
            let start = from.unwrap_or_else(|| end.with_day(1).unwrap_or(end));

            let service = GoldService::new(client);
            match service.compare(start, end, today).await? {
                Some(cmp) => {
                    println!(
                        "Gold price on {}: {} PLN/g",
                        cmp.current.date(),
                        cmp.current.price()
                    );
                    println!(
                        "Compared to the best price between {} and {}: {} PLN",
                        start, end, cmp.gain_or_loss
                    );
                }
                None => println!("No results for {} to {}. No comparison.", start, end),
            }
        }
    }

    Ok(())
}
