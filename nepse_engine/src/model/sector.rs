//! Sector performance snapshots and their clamped tick.

use nepse_common::Sector;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Half-width of the initial sector draw, in percent.
pub const SECTOR_INITIAL_RANGE: f64 = 2.0;

/// Largest per-tick sector move, in percentage points.
pub const SECTOR_TICK_RANGE: f64 = 0.2;

/// Bound applied to every ticked sector change, in percent.
pub const SECTOR_CHANGE_LIMIT: f64 = 5.0;

/// Performance of one sector at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorSnapshot {
    /// Lowercase identifier, e.g. `banking`.
    pub id: String,
    /// Display name, e.g. `Banking`.
    pub name: String,
    /// Relative change in percent.
    pub change_percent: f64,
}

impl SectorSnapshot {
    /// Creates a snapshot for `sector` with the given change.
    pub fn new(sector: Sector, change_percent: f64) -> Self {
        SectorSnapshot {
            id: sector.id(),
            name: sector.to_string(),
            change_percent,
        }
    }
}

/// One snapshot per sector in reporting order, each drawn from `[-2, 2)`.
pub fn generate_sectors<R: Rng + ?Sized>(rng: &mut R) -> Vec<SectorSnapshot> {
    Sector::iter()
        .map(|sector| {
            let change = rng.random_range(-SECTOR_INITIAL_RANGE..SECTOR_INITIAL_RANGE);
            SectorSnapshot::new(sector, change)
        })
        .collect()
}

/// Move every sector by `[-0.2, +0.2]` and clamp the result to `[-5, 5]`.
pub fn tick_sectors<R: Rng + ?Sized>(
    rng: &mut R,
    sectors: &[SectorSnapshot],
) -> Vec<SectorSnapshot> {
    sectors
        .iter()
        .map(|sector| {
            let random_delta = rng.random_range(-SECTOR_TICK_RANGE..=SECTOR_TICK_RANGE);
            let bounded = (sector.change_percent + random_delta)
                .clamp(-SECTOR_CHANGE_LIMIT, SECTOR_CHANGE_LIMIT);
            SectorSnapshot {
                change_percent: bounded,
                ..sector.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_all_nine_in_order() {
        let mut rng = StdRng::seed_from_u64(8);
        let sectors = generate_sectors(&mut rng);
        let ids: Vec<&str> = sectors.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "banking",
                "hydropower",
                "insurance",
                "microfinance",
                "investment",
                "manufacturing",
                "hotels",
                "trading",
                "others"
            ]
        );
        assert!(sectors.iter().all(|s| (-2.0..2.0).contains(&s.change_percent)));
    }

    #[test]
    fn tick_stays_clamped_at_the_boundaries() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut sectors = vec![
            SectorSnapshot::new(Sector::Banking, 5.0),
            SectorSnapshot::new(Sector::Hotels, -5.0),
            SectorSnapshot::new(Sector::Trading, 4.95),
            SectorSnapshot::new(Sector::Others, 42.0),
        ];
        for _ in 0..1000 {
            sectors = tick_sectors(&mut rng, &sectors);
            for s in &sectors {
                assert!(
                    (-SECTOR_CHANGE_LIMIT..=SECTOR_CHANGE_LIMIT).contains(&s.change_percent),
                    "{} escaped: {}",
                    s.id,
                    s.change_percent
                );
            }
        }
    }

    #[test]
    fn tick_step_is_small() {
        let mut rng = StdRng::seed_from_u64(10);
        let before = generate_sectors(&mut rng);
        let after = tick_sectors(&mut rng, &before);
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(&after) {
            assert_eq!(b.id, a.id);
            assert!((a.change_percent - b.change_percent).abs() <= SECTOR_TICK_RANGE + 1e-12);
        }
    }
}
