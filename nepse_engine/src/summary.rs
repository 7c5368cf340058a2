//! Market-wide statistics derived from a set of quote snapshots.

use serde::{Deserialize, Serialize};

use crate::model::quote::QuoteSnapshot;

/// How many names the gainer/loser lists keep.
pub const TOP_MOVERS: usize = 5;

/// Summary view over a quote collection. Never stored; recompute on change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    /// Sum of all volumes.
    pub total_volume: u64,
    /// Sum of `price * volume`.
    pub total_turnover: f64,
    /// Quotes with a positive change.
    pub advancers: usize,
    /// Quotes with a negative change.
    pub decliners: usize,
    /// Quotes with zero change.
    pub unchanged: usize,
    /// Up to five quotes with the highest change percent, best first.
    pub top_gainers: Vec<QuoteSnapshot>,
    /// Up to five quotes with the lowest change percent, worst first.
    pub top_losers: Vec<QuoteSnapshot>,
}

/// Compute the summary for `quotes`.
///
/// Ties in the mover lists keep their input order. An empty input yields the
/// all-zero summary with empty lists.
pub fn summarize(quotes: &[QuoteSnapshot]) -> MarketSummary {
    let mut summary = MarketSummary::default();

    for quote in quotes {
        summary.total_volume += quote.volume;
        summary.total_turnover += quote.turnover();
        if quote.change > 0.0 {
            summary.advancers += 1;
        } else if quote.change < 0.0 {
            summary.decliners += 1;
        } else if quote.change == 0.0 {
            summary.unchanged += 1;
        }
    }

    let mut by_change: Vec<&QuoteSnapshot> = quotes.iter().collect();
    by_change.sort_by(|a, b| b.change_percent.total_cmp(&a.change_percent));
    summary.top_gainers = by_change.iter().take(TOP_MOVERS).map(|q| (*q).clone()).collect();

    by_change.sort_by(|a, b| a.change_percent.total_cmp(&b.change_percent));
    summary.top_losers = by_change.iter().take(TOP_MOVERS).map(|q| (*q).clone()).collect();

    summary
}
