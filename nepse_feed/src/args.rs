//! Command-line arguments for the market feed.
//!
//! This module defines the CLI interface using `clap`. Every flag overrides the
//! matching value from the optional JSON config file.
use clap::Parser;
use nepse_common::Ticker;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Simulated NEPSE market feed", long_about = None)]
pub struct Args {
    /// Path to a JSON config file.
    #[clap(long)]
    pub config: Option<String>,

    /// Seed for reproducible output.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Quote tick interval in milliseconds.
    #[clap(long)]
    pub quote_interval_ms: Option<u64>,

    /// Index tick interval in milliseconds.
    #[clap(long)]
    pub index_interval_ms: Option<u64>,

    /// Sector tick interval in milliseconds.
    #[clap(long)]
    pub sector_interval_ms: Option<u64>,

    /// Look-back of the startup chart series, in days.
    #[clap(long, allow_hyphen_values = true)]
    pub history_days: Option<i64>,

    /// Instrument whose chart and profile are printed at startup.
    #[clap(long, value_enum)]
    pub symbol: Option<Ticker>,

    /// Stop after this many seconds instead of waiting for Ctrl+C.
    #[clap(long)]
    pub run_for_secs: Option<u64>,

    /// Write every snapshot to stdout as one JSON line.
    #[clap(long)]
    pub json: bool,
}
