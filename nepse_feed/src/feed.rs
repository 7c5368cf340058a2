//! Timer-driven feed loop.
//!
//! One `crossbeam_channel::tick` receiver per stream is multiplexed with `select!`.
//! Whichever timer fires selects the `FeedEvent` passed to the engine's reducer; the
//! resulting state replaces the previous one and is reported. Streams never overlap
//! because a single thread consumes all of them.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use chrono::Utc;
use crossbeam_channel::{select, tick};
use log::{debug, info};
use nepse_common::{MarketError, Result};
use nepse_engine::model::history::HistoricalSeries;
use nepse_engine::{
    DashboardState, FeedEvent, IndexSnapshot, MarketSimulator, MarketSummary, QuoteSnapshot,
    SectorSnapshot, SessionState, StockProfile,
};
use serde::Serialize;

use crate::config::FeedConfig;

/// How often the loop wakes up to check for shutdown when no timer fired.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// JSON line payloads written with `--json`.
#[derive(Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
enum FeedMessage<'a> {
    Quotes {
        quotes: &'a [QuoteSnapshot],
        summary: &'a MarketSummary,
    },
    Index(&'a IndexSnapshot),
    Sectors(&'a [SectorSnapshot]),
    Session(&'a SessionState),
    Chart {
        symbol: String,
        series: &'a HistoricalSeries,
    },
    Profile(&'a StockProfile),
}

/// Owns the simulator and drives the dashboard state through its timers.
pub struct MarketFeed {
    config: FeedConfig,
    simulator: MarketSimulator,
}

impl MarketFeed {
    /// Create a feed; the simulator is seeded from `config.seed` when present.
    pub fn new(config: FeedConfig) -> Self {
        let simulator = match config.seed {
            Some(seed) => MarketSimulator::with_seed(seed),
            None => MarketSimulator::new(),
        };
        Self { config, simulator }
    }

    /// Blocking loop; returns when `shutdown` is set or the configured run time ends.
    pub fn run(mut self, shutdown: Arc<AtomicBool>) -> Result<()> {
        self.print_startup()?;

        let quote_rx = tick(self.config.quote_interval());
        let index_rx = tick(self.config.index_interval());
        let sector_rx = tick(self.config.sector_interval());
        let session_rx = tick(self.config.session_interval());
        let refresh_rx = tick(self.config.refresh_interval());
        let deadline = self
            .config
            .run_for_secs
            .map(|secs| Instant::now() + Duration::from_secs(secs));

        let mut state = self.simulator.initial_dashboard(Utc::now());
        self.report(FeedEvent::RefreshQuotes, &state)?;
        self.report(FeedEvent::IndexTick, &state)?;
        self.report(FeedEvent::SectorTick, &state)?;

        while !shutdown.load(Ordering::Relaxed) {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                info!("Run time elapsed");
                break;
            }
            let received = select! {
                recv(quote_rx) -> msg => msg.map(|_| FeedEvent::QuoteTick),
                recv(index_rx) -> msg => msg.map(|_| FeedEvent::IndexTick),
                recv(sector_rx) -> msg => msg.map(|_| FeedEvent::SectorTick),
                recv(session_rx) -> msg => msg.map(|_| FeedEvent::SessionCheck),
                recv(refresh_rx) -> msg => msg.map(|_| FeedEvent::RefreshQuotes),
                default(POLL_INTERVAL) => continue,
            };
            let event = received.map_err(|e| MarketError::ChannelRecv(e.to_string()))?;
            state = self.simulator.step(state, event, Utc::now());
            self.report(event, &state)?;
        }
        info!("Feed loop stopping...");
        Ok(())
    }

    fn print_startup(&mut self) -> Result<()> {
        let session = self.simulator.session_state(Utc::now());
        info!("{}", session);

        let instrument = self.config.symbol.instrument();
        let series = self
            .simulator
            .generate_historical_series(self.config.history_days)?;
        if let (Some(first), Some(last)) = (series.close.first(), series.close.last()) {
            info!(
                "{} chart: {} bars, close {:.2} -> {:.2}",
                instrument.symbol,
                series.len(),
                first,
                last
            );
        }
        let profile = self.simulator.generate_profile(&instrument);
        info!(
            "{} ({}), {} employees",
            instrument.name, profile.sector, profile.full_time_employees
        );

        self.emit(&FeedMessage::Session(&session))?;
        self.emit(&FeedMessage::Chart {
            symbol: instrument.symbol.clone(),
            series: &series,
        })?;
        self.emit(&FeedMessage::Profile(&profile))
    }

    fn report(&self, event: FeedEvent, state: &DashboardState) -> Result<()> {
        debug!("Applied {} at {}", event, state.updated_at);
        match event {
            FeedEvent::QuoteTick | FeedEvent::RefreshQuotes => {
                let summary = &state.summary;
                let leader = summary
                    .top_gainers
                    .first()
                    .map(|q| format!("{} {:+.2}%", q.symbol, q.change_percent))
                    .unwrap_or_else(|| String::from("-"));
                info!(
                    "Quotes: {} up / {} down / {} flat, volume {}, turnover {:.2}, top {}",
                    summary.advancers,
                    summary.decliners,
                    summary.unchanged,
                    summary.total_volume,
                    summary.total_turnover,
                    leader
                );
                self.emit(&FeedMessage::Quotes {
                    quotes: &state.quotes,
                    summary,
                })
            }
            FeedEvent::IndexTick => {
                let index = &state.index;
                info!(
                    "NEPSE {:.2} ({:+.2}, {:+.2}%)",
                    index.value, index.change, index.change_percent
                );
                self.emit(&FeedMessage::Index(index))
            }
            FeedEvent::SectorTick => {
                let best = state
                    .sectors
                    .iter()
                    .max_by(|a, b| a.change_percent.total_cmp(&b.change_percent));
                let worst = state
                    .sectors
                    .iter()
                    .min_by(|a, b| a.change_percent.total_cmp(&b.change_percent));
                if let (Some(best), Some(worst)) = (best, worst) {
                    info!(
                        "Sectors: best {} {:+.2}%, worst {} {:+.2}%",
                        best.name, best.change_percent, worst.name, worst.change_percent
                    );
                }
                self.emit(&FeedMessage::Sectors(&state.sectors))
            }
            FeedEvent::SessionCheck => {
                info!("{}", state.session);
                self.emit(&FeedMessage::Session(&state.session))
            }
        }
    }

    fn emit(&self, message: &FeedMessage<'_>) -> Result<()> {
        if !self.config.json {
            return Ok(());
        }
        let line = serde_json::to_string(message)?;
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }
}
