//! Seedable facade over the generators, mutators, calendar and aggregator.
//!
//! `MarketSimulator` owns the random source so callers do not have to thread one
//! through every call. Two simulators built with the same seed produce identical
//! output for identical call sequences.

use chrono::{DateTime, Utc};
use log::debug;
use nepse_common::tickers::list_instruments;
use nepse_common::{Instrument, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::calendar::{SessionState, session_state};
use crate::dashboard::{DashboardState, FeedEvent};
use crate::model::history::{DEFAULT_HISTORY_DAYS, HistoricalSeries, generate_historical_series};
use crate::model::index::{IndexSnapshot, generate_index, tick_index};
use crate::model::profile::{StockProfile, generate_profile};
use crate::model::quote::{QuoteSnapshot, generate_quote, generate_quotes, tick_quote, tick_quotes};
use crate::model::sector::{SectorSnapshot, generate_sectors, tick_sectors};
use crate::summary::{MarketSummary, summarize};

/// Synthetic market data source.
pub struct MarketSimulator {
    rng: StdRng,
}

impl Default for MarketSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketSimulator {
    /// Create a simulator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a simulator with a fixed seed (for reproducible runs and tests).
    pub fn with_seed(seed: u64) -> Self {
        debug!("Market simulator seeded with {}", seed);
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Catalog instruments in declaration order.
    pub fn list_instruments(&self) -> Vec<Instrument> {
        list_instruments()
    }

    /// Fresh snapshot for one instrument.
    pub fn generate_quote(&mut self, instrument: &Instrument) -> QuoteSnapshot {
        generate_quote(&mut self.rng, instrument)
    }

    /// Fresh snapshot for every catalog instrument, in catalog order.
    pub fn generate_all_quotes(&mut self) -> Vec<QuoteSnapshot> {
        let quotes = generate_quotes(&mut self.rng, &list_instruments());
        debug!("Generated {} quotes", quotes.len());
        quotes
    }

    /// Fresh index snapshot stamped with the current time.
    pub fn generate_index(&mut self) -> IndexSnapshot {
        generate_index(&mut self.rng, Utc::now())
    }

    /// `days + 1` daily bars ending today.
    pub fn generate_historical_series(&mut self, days: i64) -> Result<HistoricalSeries> {
        generate_historical_series(&mut self.rng, days, Utc::now())
    }

    /// Chart data over the default look-back.
    pub fn generate_chart_data(&mut self) -> Result<HistoricalSeries> {
        self.generate_historical_series(DEFAULT_HISTORY_DAYS)
    }

    /// Fresh snapshot for every sector, in reporting order.
    pub fn generate_sectors(&mut self) -> Vec<SectorSnapshot> {
        generate_sectors(&mut self.rng)
    }

    /// Simulated company profile.
    pub fn generate_profile(&mut self, instrument: &Instrument) -> StockProfile {
        generate_profile(&mut self.rng, instrument)
    }

    /// Next snapshot of one quote.
    pub fn tick_quote(&mut self, quote: &QuoteSnapshot) -> QuoteSnapshot {
        tick_quote(&mut self.rng, quote)
    }

    /// Next snapshot of every quote.
    pub fn tick_quotes(&mut self, quotes: &[QuoteSnapshot]) -> Vec<QuoteSnapshot> {
        tick_quotes(&mut self.rng, quotes)
    }

    /// Next snapshot of the index, stamped with the current time.
    pub fn tick_index(&mut self, index: &IndexSnapshot) -> IndexSnapshot {
        tick_index(&mut self.rng, index, Utc::now())
    }

    /// Next snapshot of every sector.
    pub fn tick_sectors(&mut self, sectors: &[SectorSnapshot]) -> Vec<SectorSnapshot> {
        tick_sectors(&mut self.rng, sectors)
    }

    /// Trading session state at `now`.
    pub fn session_state(&self, now: DateTime<Utc>) -> SessionState {
        session_state(now)
    }

    /// Market-wide statistics for `quotes`.
    pub fn summarize(&self, quotes: &[QuoteSnapshot]) -> MarketSummary {
        summarize(quotes)
    }

    /// Dashboard with every stream generated once.
    pub fn initial_dashboard(&mut self, now: DateTime<Utc>) -> DashboardState {
        DashboardState::initial(&mut self.rng, now)
    }

    /// Advance `state` by one event.
    pub fn step(
        &mut self,
        state: DashboardState,
        event: FeedEvent,
        now: DateTime<Utc>,
    ) -> DashboardState {
        state.step(event, &mut self.rng, now)
    }
}
