//! Dashboard state and its reducer.
//!
//! The presentation layer holds one [`DashboardState`] and feeds it back through
//! [`DashboardState::step`] whenever one of its timers fires. Each step consumes the
//! previous state and returns the next, so every stream history is a strict chain.

use chrono::{DateTime, Utc};
use log::trace;
use nepse_common::tickers::list_instruments;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::calendar::{SessionState, session_state};
use crate::model::index::{IndexSnapshot, generate_index, tick_index};
use crate::model::quote::{QuoteSnapshot, generate_quotes, tick_quotes};
use crate::model::sector::{SectorSnapshot, generate_sectors, tick_sectors};
use crate::summary::{MarketSummary, summarize};

/// Timer event driving one reducer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FeedEvent {
    /// Random-walk every quote.
    QuoteTick,
    /// Random-walk the index.
    IndexTick,
    /// Nudge every sector.
    SectorTick,
    /// Re-evaluate the trading session.
    SessionCheck,
    /// Replace every quote with a freshly generated one.
    RefreshQuotes,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    /// One quote per catalog instrument, in catalog order.
    pub quotes: Vec<QuoteSnapshot>,
    /// Summary of `quotes`, kept in sync by the reducer.
    pub summary: MarketSummary,
    /// Aggregate index.
    pub index: IndexSnapshot,
    /// Sector performance in reporting order.
    pub sectors: Vec<SectorSnapshot>,
    /// Trading session state.
    pub session: SessionState,
    /// Instant of the last applied step.
    pub updated_at: DateTime<Utc>,
}

impl DashboardState {
    /// Generate every stream once.
    pub fn initial<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Self {
        let quotes = generate_quotes(rng, &list_instruments());
        let summary = summarize(&quotes);
        DashboardState {
            quotes,
            summary,
            index: generate_index(rng, now),
            sectors: generate_sectors(rng),
            session: session_state(now),
            updated_at: now,
        }
    }

    /// Apply `event` and return the next state.
    pub fn step<R: Rng + ?Sized>(self, event: FeedEvent, rng: &mut R, now: DateTime<Utc>) -> Self {
        trace!("Dashboard step: {}", event);
        let mut next = match event {
            FeedEvent::QuoteTick => {
                let quotes = tick_quotes(rng, &self.quotes);
                DashboardState {
                    summary: summarize(&quotes),
                    quotes,
                    ..self
                }
            }
            FeedEvent::RefreshQuotes => {
                let quotes = generate_quotes(rng, &list_instruments());
                DashboardState {
                    summary: summarize(&quotes),
                    quotes,
                    ..self
                }
            }
            FeedEvent::IndexTick => DashboardState {
                index: tick_index(rng, &self.index, now),
                ..self
            },
            FeedEvent::SectorTick => DashboardState {
                sectors: tick_sectors(rng, &self.sectors),
                ..self
            },
            FeedEvent::SessionCheck => DashboardState {
                session: session_state(now),
                ..self
            },
        };
        next.updated_at = now;
        next
    }
}
