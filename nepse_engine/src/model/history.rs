//! Historical OHLCV series generator.
//!
//! A series is a single connected random walk: each day opens at the previous day's
//! close and closes up to 3% away from it. High and low always bracket the open/close
//! pair. Timestamps are UTC-midnight epoch seconds, oldest first.

use chrono::{DateTime, Utc};
use log::warn;
use nepse_common::{MarketError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default look-back used for chart data.
pub const DEFAULT_HISTORY_DAYS: i64 = 30;

/// Longest look-back accepted by [`generate_historical_series`].
pub const MAX_HISTORY_DAYS: i64 = 36_500;

/// Largest daily move in percent.
pub const DAILY_MOVE_PERCENT: f64 = 3.0;

const SECONDS_PER_DAY: i64 = 86_400;

/// Daily bars as parallel columns of equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    /// Epoch seconds at UTC midnight, ascending.
    pub timestamp: Vec<i64>,
    /// Opening prices.
    pub open: Vec<f64>,
    /// Daily highs.
    pub high: Vec<f64>,
    /// Daily lows.
    pub low: Vec<f64>,
    /// Closing prices.
    pub close: Vec<f64>,
    /// Shares traded per day.
    pub volume: Vec<u64>,
}

impl HistoricalSeries {
    fn with_capacity(len: usize) -> Self {
        HistoricalSeries {
            timestamp: Vec::with_capacity(len),
            open: Vec::with_capacity(len),
            high: Vec::with_capacity(len),
            low: Vec::with_capacity(len),
            close: Vec::with_capacity(len),
            volume: Vec::with_capacity(len),
        }
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.timestamp.len()
    }

    /// `true` when the series holds no bars.
    pub fn is_empty(&self) -> bool {
        self.timestamp.is_empty()
    }

    /// Encode the series to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}

/// Generate `days + 1` daily bars ending with the bar for `now`'s UTC date.
///
/// Fails with [`MarketError::InvalidArgument`] when `days` is negative or exceeds
/// [`MAX_HISTORY_DAYS`].
pub fn generate_historical_series<R: Rng + ?Sized>(
    rng: &mut R,
    days: i64,
    now: DateTime<Utc>,
) -> Result<HistoricalSeries> {
    if days < 0 {
        warn!("Rejected history request for {} days", days);
        return Err(MarketError::invalid_argument(format!(
            "days must be non-negative, got {}",
            days
        )));
    }
    if days > MAX_HISTORY_DAYS {
        warn!("Rejected history request for {} days", days);
        return Err(MarketError::invalid_argument(format!(
            "days must not exceed {}, got {}",
            MAX_HISTORY_DAYS, days
        )));
    }

    let today = now.timestamp().div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY;
    let mut series = HistoricalSeries::with_capacity(days as usize + 1);
    let mut base_price = rng.random_range(100..1000u32) as f64;

    for i in (0..=days).rev() {
        let pct_change = rng.random_range(-DAILY_MOVE_PERCENT..DAILY_MOVE_PERCENT);

        let day_open = base_price;
        let day_close = base_price + base_price * pct_change / 100.0;
        let day_high = day_open.max(day_close) + rng.random_range(0.0..10.0_f64);
        let day_low = day_open.min(day_close) - rng.random_range(0.0..10.0_f64);

        series.timestamp.push(today - i * SECONDS_PER_DAY);
        series.open.push(day_open);
        series.high.push(day_high);
        series.low.push(day_low);
        series.close.push(day_close);
        series.volume.push(rng.random_range(1000..10000u64));

        base_price = day_close;
    }

    Ok(series)
}
