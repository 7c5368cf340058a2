//! Feed configuration.
//!
//! Values come from built-in defaults, optionally replaced by a JSON file, and finally
//! overridden by command-line flags. `validate` runs last.

use std::fs;
use std::path::Path;
use std::time::Duration;

use nepse_common::{MarketError, Result, Ticker};
use nepse_engine::model::history::{DEFAULT_HISTORY_DAYS, MAX_HISTORY_DAYS};
use serde::Deserialize;

use crate::args::Args;

/// Runtime settings for the feed loop.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Quote tick interval in milliseconds.
    pub quote_interval_ms: u64,
    /// Index tick interval in milliseconds.
    pub index_interval_ms: u64,
    /// Sector tick interval in milliseconds.
    pub sector_interval_ms: u64,
    /// Session re-check interval in milliseconds.
    pub session_interval_ms: u64,
    /// Full quote regeneration interval in milliseconds.
    pub refresh_interval_ms: u64,
    /// Look-back of the startup chart series.
    pub history_days: i64,
    /// Instrument for the startup chart and profile.
    pub symbol: Ticker,
    /// Fixed RNG seed; OS entropy when absent.
    pub seed: Option<u64>,
    /// Emit JSON lines on stdout.
    pub json: bool,
    /// Stop after this many seconds; run until Ctrl+C when absent.
    pub run_for_secs: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            quote_interval_ms: 5_000,
            index_interval_ms: 3_000,
            sector_interval_ms: 10_000,
            session_interval_ms: 60_000,
            refresh_interval_ms: 60_000,
            history_days: DEFAULT_HISTORY_DAYS,
            symbol: Ticker::NABIL,
            seed: None,
            json: false,
            run_for_secs: None,
        }
    }
}

impl FeedConfig {
    /// Parse a config from JSON text. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config = serde_json::from_str(text)?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build the effective config: file (if any), then CLI overrides, then validation.
    pub fn resolve(args: &Args) -> Result<Self> {
        let base = match &args.config {
            Some(path) => Self::load(Path::new(path.trim()))?,
            None => Self::default(),
        };
        let config = base.with_overrides(args);
        config.validate()?;
        Ok(config)
    }

    /// Replace values with those given on the command line.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(ms) = args.quote_interval_ms {
            self.quote_interval_ms = ms;
        }
        if let Some(ms) = args.index_interval_ms {
            self.index_interval_ms = ms;
        }
        if let Some(ms) = args.sector_interval_ms {
            self.sector_interval_ms = ms;
        }
        if let Some(days) = args.history_days {
            self.history_days = days;
        }
        if let Some(symbol) = args.symbol {
            self.symbol = symbol;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.run_for_secs.is_some() {
            self.run_for_secs = args.run_for_secs;
        }
        self.json |= args.json;
        self
    }

    /// Reject zero intervals and out-of-range look-backs.
    pub fn validate(&self) -> Result<()> {
        let intervals = [
            ("quote_interval_ms", self.quote_interval_ms),
            ("index_interval_ms", self.index_interval_ms),
            ("sector_interval_ms", self.sector_interval_ms),
            ("session_interval_ms", self.session_interval_ms),
            ("refresh_interval_ms", self.refresh_interval_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(MarketError::invalid_argument(format!("{} must be positive", name)));
            }
        }
        if !(0..=MAX_HISTORY_DAYS).contains(&self.history_days) {
            return Err(MarketError::invalid_argument(format!(
                "history_days must be within 0..={}, got {}",
                MAX_HISTORY_DAYS, self.history_days
            )));
        }
        Ok(())
    }

    /// Quote tick period.
    pub fn quote_interval(&self) -> Duration {
        Duration::from_millis(self.quote_interval_ms)
    }

    /// Index tick period.
    pub fn index_interval(&self) -> Duration {
        Duration::from_millis(self.index_interval_ms)
    }

    /// Sector tick period.
    pub fn sector_interval(&self) -> Duration {
        Duration::from_millis(self.sector_interval_ms)
    }

    /// Session re-check period.
    pub fn session_interval(&self) -> Duration {
        Duration::from_millis(self.session_interval_ms)
    }

    /// Quote regeneration period.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}
