//!
//! Common types shared by the market engine and the terminal feed.
//!
//! This crate aggregates:
//! - `error` — unified error type `MarketError` used across the workspace.
//! - `result` — handy `Result<T, MarketError>` alias.
//! - `tickers` — the instrument catalog and ticker parsing helpers.
//! - `sectors` — the fixed sector enumeration.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod sectors;
pub mod tickers;

pub use error::MarketError;
pub use result::Result;
pub use sectors::Sector;
pub use tickers::{Instrument, Ticker};
