//! restaurant-synth - inspect the deterministic dashboard dataset.
//!
//! # Commands
//!
//! - `restaurant-synth feed <store> [--date YYYY-MM-DD]` - daily content feed
//! - `restaurant-synth vendors <store>` - vendors of a store
//! - `restaurant-synth history <vendor>` - a vendor's cost history
//! - `restaurant-synth cost <vendor> <month> <year>` - one month's amount
//! - `restaurant-synth summary <store> <month> <year>` - month-over-month summary
//! - `restaurant-synth fiscal` - the fiscal month window
//! - `restaurant-synth fingerprint` - SHA-256 of the generated ledger
//!
//! All output is JSON on stdout; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use restaurant_synth_core_rs::{DashboardData, EngineConfig};

mod error;

use error::{CliError, CliResult};

/// Deterministic synthetic data for the restaurant operator dashboard
#[derive(Parser)]
#[command(name = "restaurant-synth")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// JSON engine configuration (defaults to the canonical dataset)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily content feed for a store
    Feed {
        /// Store id
        store: u32,

        /// Calendar date (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Vendors owned by a store
    Vendors {
        /// Store id
        store: u32,
    },

    /// Chronological cost history of a vendor
    History {
        /// Vendor id
        vendor: u32,
    },

    /// Amount billed by a vendor in one month (cents)
    Cost {
        vendor: u32,
        month: u32,
        year: i32,
    },

    /// Month-over-month vendor comparison for a store
    Summary {
        store: u32,
        month: u32,
        year: i32,
    },

    /// The 12-month fiscal window
    Fiscal,

    /// SHA-256 fingerprint of the generated ledger
    Fingerprint,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn load_dataset(config: Option<&PathBuf>) -> CliResult<DashboardData> {
    let config = match config {
        Some(path) => EngineConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };
    Ok(DashboardData::build(config)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> CliResult<()> {
    let data = load_dataset(cli.config.as_ref())?;

    match cli.command {
        Commands::Feed { store, date } => {
            let items = match date {
                Some(raw) => {
                    let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                        .map_err(|_| CliError::InvalidDate(raw.clone()))?;
                    data.daily_content_on(store, date)
                }
                None => data.daily_content(store),
            };
            print_json(&items)
        }
        Commands::Vendors { store } => print_json(&data.vendors_for_store(store)),
        Commands::History { vendor } => print_json(&data.cost_history(vendor)),
        Commands::Cost {
            vendor,
            month,
            year,
        } => print_json(&data.cost_for_month(vendor, month, year)),
        Commands::Summary { store, month, year } => {
            print_json(&data.monthly_summary(store, month, year))
        }
        Commands::Fiscal => print_json(data.fiscal_year().months()),
        Commands::Fingerprint => print_json(&data.fingerprint()?),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
