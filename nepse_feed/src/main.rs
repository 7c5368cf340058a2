//! NEPSE market feed — a terminal stand-in for the dashboard's presentation layer.
//!
//! It generates a simulated market, prints the trading session state and a chart
//! series for one instrument, then keeps the quotes, the index and the sector set
//! moving on independent timers until Ctrl+C (or `--run-for-secs`) stops it.
//!
//! Usage example (CLI):
//! ```bash
//! nepse_feed --seed 42 --symbol nabil --quote-interval-ms 1000 --json
//! ```
//!
//! Defaults can also be supplied through `--config feed.json`; see `config` for the
//! recognised keys.
#![warn(missing_docs)]
mod args;
mod config;
mod feed;

use crate::args::Args;
use crate::config::FeedConfig;
use crate::feed::MarketFeed;
use clap::Parser;
use log::info;
use nepse_common::MarketError;
use nepse_common::Result;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

fn main() -> Result<(), MarketError> {
    init_logger();
    let args = Args::parse();
    let config = FeedConfig::resolve(&args)?;
    info!("Feed configuration: {:?}", config);

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down feed...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| MarketError::Format(format!("Error setting Ctrl+C handler: {}", e)))?;
    }

    info!("Feed is running. Press Ctrl+C to exit.");
    MarketFeed::new(config).run(shutdown)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
