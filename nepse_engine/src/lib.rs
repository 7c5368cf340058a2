//! Market simulation and session engine.
//!
//! Synthesises quotes, an aggregate index, daily OHLCV history and sector
//! performance, evolves them tick by tick with bounded random walks, and answers
//! whether the exchange is open on its UTC+05:45 trading clock.
//!
//! Modules:
//! - `model` — snapshot types with their generators and tick functions.
//! - `calendar` — session open/closed state and next-open instant.
//! - `summary` — breadth, turnover and top movers over a quote set.
//! - `table` — quote-table sorting and search.
//! - `dashboard` — the state reducer driven by the presentation layer's timers.
//! - `simulator` — `MarketSimulator`, a seedable facade over all of the above.
//!
//! Every generator and tick is a free function generic over `rand::Rng`, so any
//! random source can be injected.
#![warn(missing_docs)]
pub mod calendar;
pub mod dashboard;
pub mod model;
pub mod simulator;
pub mod summary;
pub mod table;

pub use calendar::{SessionState, session_state};
pub use dashboard::{DashboardState, FeedEvent};
pub use model::history::HistoricalSeries;
pub use model::index::IndexSnapshot;
pub use model::profile::StockProfile;
pub use model::quote::QuoteSnapshot;
pub use model::sector::SectorSnapshot;
pub use simulator::MarketSimulator;
pub use summary::{MarketSummary, summarize};
