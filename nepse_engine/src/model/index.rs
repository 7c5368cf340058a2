//! Aggregate index snapshot, its generator and its real-time tick.

use chrono::{DateTime, Utc};
use nepse_common::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Reference level the simulated index oscillates around.
pub const INDEX_BASE_VALUE: f64 = 2743.74;

/// Largest relative move applied by a single index tick (0.1%).
pub const INDEX_TICK_RANGE: f64 = 0.001;

/// Index level at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSnapshot {
    /// Current index level.
    pub value: f64,
    /// Absolute change against the previous close.
    pub change: f64,
    /// Relative change in percent.
    pub change_percent: f64,
    /// UTC timestamp in milliseconds since Unix epoch.
    pub timestamp: u64,
}

impl IndexSnapshot {
    /// Encode the snapshot to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}

pub(crate) fn epoch_millis(now: DateTime<Utc>) -> u64 {
    now.timestamp_millis().max(0) as u64
}

/// Draw a fresh index snapshot stamped with `now`.
///
/// The change percent is uniform in `[-1, 1)` and applied to [`INDEX_BASE_VALUE`].
pub fn generate_index<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> IndexSnapshot {
    let change_percent: f64 = rng.random_range(-1.0..1.0);
    let change = INDEX_BASE_VALUE * change_percent / 100.0;

    IndexSnapshot {
        value: INDEX_BASE_VALUE + change,
        change,
        change_percent,
        timestamp: epoch_millis(now),
    }
}

/// Derive the next index snapshot with a `[-0.1%, +0.1%]` random walk step.
///
/// Same shape as the quote tick: the step is added to `value` and `change`, and
/// `change_percent` moves by the step in percent. Unbounded over many ticks.
pub fn tick_index<R: Rng + ?Sized>(
    rng: &mut R,
    index: &IndexSnapshot,
    now: DateTime<Utc>,
) -> IndexSnapshot {
    let random_factor: f64 = rng.random_range(-INDEX_TICK_RANGE..=INDEX_TICK_RANGE);
    let value_delta = index.value * random_factor;

    IndexSnapshot {
        value: index.value + value_delta,
        change: index.change + value_delta,
        change_percent: index.change_percent + random_factor * 100.0,
        timestamp: epoch_millis(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 4, 8, 30, 0).unwrap()
    }

    #[test]
    fn generated_index_stays_within_one_percent_of_base() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..500 {
            let index = generate_index(&mut rng, at());
            assert!(index.change_percent >= -1.0 && index.change_percent < 1.0);
            assert!((index.value - INDEX_BASE_VALUE - index.change).abs() < 1e-9);
            assert!((index.change - INDEX_BASE_VALUE * index.change_percent / 100.0).abs() < 1e-9);
            assert_eq!(index.timestamp, at().timestamp_millis() as u64);
        }
    }

    #[test]
    fn tick_is_bounded_and_restamps() {
        let mut rng = StdRng::seed_from_u64(22);
        let before = generate_index(&mut rng, at());
        let later = at() + chrono::Duration::seconds(3);
        for _ in 0..200 {
            let after = tick_index(&mut rng, &before, later);
            let delta = after.value - before.value;
            assert!(delta.abs() <= before.value * INDEX_TICK_RANGE + 1e-9);
            assert!((after.change - before.change - delta).abs() < 1e-9);
            assert!((after.change_percent - before.change_percent).abs() <= 0.1 + 1e-9);
            assert_eq!(after.timestamp, later.timestamp_millis() as u64);
        }
    }
}
