//! Snapshot models and the generators/mutators that produce them.
//!
//! - `quote` — per-instrument `QuoteSnapshot`, its generator and tick.
//! - `index` — aggregate `IndexSnapshot`, its generator and tick.
//! - `history` — daily OHLCV `HistoricalSeries` random walk.
//! - `sector` — `SectorSnapshot` set and its clamped tick.
//! - `profile` — simulated `StockProfile` details.

pub mod history;
pub mod index;
pub mod profile;
pub mod quote;
pub mod sector;
