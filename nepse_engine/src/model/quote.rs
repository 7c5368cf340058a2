//! Quote snapshot model, its generator and its real-time tick.
//!
//! A `QuoteSnapshot` is the per-instrument payload shown in the quote table. Snapshots
//! are never mutated: [`generate_quote`] draws a fresh one and [`tick_quote`] derives
//! the next one from the previous with a small random walk step.

use nepse_common::Instrument;
use nepse_common::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Currency every simulated price is quoted in.
pub const CURRENCY: &str = "NPR";

/// Largest relative price move applied by a single quote tick (1%).
pub const QUOTE_TICK_RANGE: f64 = 0.01;

/// Probability that a quote tick also adds traded volume.
pub const VOLUME_BUMP_PROBABILITY: f64 = 0.3;

/// Market snapshot for a single instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    /// Exchange symbol, e.g. `NABIL.NP`.
    pub symbol: String,
    /// Company display name.
    pub name: String,
    /// Last traded price.
    pub price: f64,
    /// Absolute change against the previous close. May be negative.
    pub change: f64,
    /// Relative change in percent. May be negative.
    pub change_percent: f64,
    /// Session open price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Shares traded.
    pub volume: u64,
    /// Market capitalisation, a whole multiple of one billion.
    pub market_cap: u64,
    /// Quote currency, always [`CURRENCY`].
    pub currency: String,
}

impl QuoteSnapshot {
    /// Traded value of this snapshot (`price * volume`).
    pub fn turnover(&self) -> f64 {
        self.price * self.volume as f64
    }

    /// Encode the snapshot to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}

/// Draw a fresh snapshot for `instrument`.
///
/// The base price is a whole number in `[100, 1000)`, the change percent is uniform
/// in `[-5, 5)`, and open/high/low are scattered around the base price. Volume is a
/// whole number in `[1000, 10000)` and market cap is `1..=99` billion.
pub fn generate_quote<R: Rng + ?Sized>(rng: &mut R, instrument: &Instrument) -> QuoteSnapshot {
    let base_price = rng.random_range(100..1000u32) as f64;
    let change_percent: f64 = rng.random_range(-5.0..5.0);
    let change = base_price * change_percent / 100.0;

    let open = base_price - rng.random_range(0.0..10.0_f64);
    let high = base_price + rng.random_range(0.0..15.0_f64);
    let low = base_price - rng.random_range(0.0..15.0_f64);

    QuoteSnapshot {
        symbol: instrument.symbol.clone(),
        name: instrument.name.clone(),
        price: base_price,
        change,
        change_percent,
        open,
        high,
        low,
        volume: rng.random_range(1000..10000u64),
        market_cap: rng.random_range(1..100u64) * 1_000_000_000,
        currency: String::from(CURRENCY),
    }
}

/// Generate one snapshot per instrument, preserving the input order.
pub fn generate_quotes<R: Rng + ?Sized>(
    rng: &mut R,
    instruments: &[Instrument],
) -> Vec<QuoteSnapshot> {
    instruments
        .iter()
        .map(|instrument| generate_quote(rng, instrument))
        .collect()
}

/// Calculate the next snapshot using a small random walk around `quote.price`.
///
/// The step is sampled uniformly from `[-1%, +1%]` and added to both `price` and
/// `change`; `change_percent` moves by the same step expressed in percent. With
/// probability 0.3 the volume grows by a whole number in `[0, 100)`. No bounds are
/// applied, so prices drift freely over many ticks.
pub fn tick_quote<R: Rng + ?Sized>(rng: &mut R, quote: &QuoteSnapshot) -> QuoteSnapshot {
    let random_factor: f64 = rng.random_range(-QUOTE_TICK_RANGE..=QUOTE_TICK_RANGE);
    let price_delta = quote.price * random_factor;

    let volume = if rng.random_bool(VOLUME_BUMP_PROBABILITY) {
        quote.volume + rng.random_range(0..100u64)
    } else {
        quote.volume
    };

    QuoteSnapshot {
        price: quote.price + price_delta,
        change: quote.change + price_delta,
        change_percent: quote.change_percent + random_factor * 100.0,
        volume,
        ..quote.clone()
    }
}

/// Apply [`tick_quote`] to every snapshot, preserving order.
pub fn tick_quotes<R: Rng + ?Sized>(rng: &mut R, quotes: &[QuoteSnapshot]) -> Vec<QuoteSnapshot> {
    quotes.iter().map(|quote| tick_quote(rng, quote)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn nabil() -> Instrument {
        Instrument::new("NABIL.NP", "Nabil Bank Limited")
    }

    #[test]
    fn generated_quote_respects_draw_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let q = generate_quote(&mut rng, &nabil());
            assert!((100.0..1000.0).contains(&q.price), "price {}", q.price);
            assert_eq!(q.price.fract(), 0.0);
            assert!(q.change_percent >= -5.0 && q.change_percent < 5.0);
            assert!((q.change - q.price * q.change_percent / 100.0).abs() < 1e-9);
            assert!(q.open <= q.price && q.open > q.price - 10.0);
            assert!(q.high >= q.price && q.high < q.price + 15.0);
            assert!(q.low <= q.price && q.low > q.price - 15.0);
            assert!((1000..10000).contains(&q.volume));
            assert_eq!(q.market_cap % 1_000_000_000, 0);
            assert!((1_000_000_000..=100_000_000_000).contains(&q.market_cap));
            assert_eq!(q.currency, "NPR");
            assert_eq!(q.symbol, "NABIL.NP");
        }
    }

    #[test]
    fn tick_moves_price_and_change_by_the_same_delta() {
        let mut rng = StdRng::seed_from_u64(11);
        let before = generate_quote(&mut rng, &nabil());
        for _ in 0..200 {
            let after = tick_quote(&mut rng, &before);
            let delta = after.price - before.price;
            assert!(delta.abs() <= before.price * QUOTE_TICK_RANGE + 1e-9);
            assert!((after.change - before.change - delta).abs() < 1e-9);
            let factor = delta / before.price;
            assert!((after.change_percent - before.change_percent - factor * 100.0).abs() < 1e-6);
            assert!(after.volume >= before.volume && after.volume < before.volume + 100);
            assert_eq!(after.open, before.open);
            assert_eq!(after.market_cap, before.market_cap);
        }
    }

    #[test]
    fn tick_leaves_input_untouched() {
        let mut rng = StdRng::seed_from_u64(3);
        let before = generate_quote(&mut rng, &nabil());
        let copy = before.clone();
        let _ = tick_quote(&mut rng, &before);
        assert_eq!(before, copy);
    }

    #[test]
    fn tick_quotes_preserves_order_and_handles_empty() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(tick_quotes(&mut rng, &[]).is_empty());

        let instruments = vec![nabil(), Instrument::new("NTC.NP", "Nepal Doorsanchar Company Limited")];
        let quotes = generate_quotes(&mut rng, &instruments);
        let next = tick_quotes(&mut rng, &quotes);
        let symbols: Vec<&str> = next.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["NABIL.NP", "NTC.NP"]);
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = generate_quote(&mut rng, &nabil());
        let text = String::from_utf8(q.to_json_bytes().unwrap()).unwrap();
        assert!(text.contains("\"changePercent\""));
        assert!(text.contains("\"marketCap\""));
    }
}
