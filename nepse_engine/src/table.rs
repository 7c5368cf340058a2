//! Ordering and search over quote tables.
//!
//! Columns are addressed through [`SortField`] so each comparator is fixed at
//! compile time rather than looked up by name.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::model::quote::QuoteSnapshot;

/// Sortable quote-table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Exchange symbol.
    Symbol,
    /// Company name.
    Name,
    /// Last price.
    Price,
    /// Absolute change.
    Change,
    /// Relative change.
    ChangePercent,
    /// Traded volume.
    Volume,
    /// Market capitalisation.
    #[default]
    MarketCap,
}

impl SortField {
    /// Ascending comparison of two quotes on this column.
    pub fn compare(&self, a: &QuoteSnapshot, b: &QuoteSnapshot) -> Ordering {
        match self {
            SortField::Symbol => a.symbol.cmp(&b.symbol),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Change => a.change.total_cmp(&b.change),
            SortField::ChangePercent => a.change_percent.total_cmp(&b.change_percent),
            SortField::Volume => a.volume.cmp(&b.volume),
            SortField::MarketCap => a.market_cap.cmp(&b.market_cap),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current column and direction of a quote table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Active column.
    pub field: SortField,
    /// Active direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Select `field`: flips direction when it is already active, otherwise switches
    /// to it in descending order.
    pub fn select(self, field: SortField) -> Self {
        if self.field == field {
            SortState {
                field,
                direction: self.direction.toggled(),
            }
        } else {
            SortState {
                field,
                direction: SortDirection::Desc,
            }
        }
    }

    /// Apply this state to `quotes`.
    pub fn apply(&self, quotes: &[QuoteSnapshot]) -> Vec<QuoteSnapshot> {
        sort_quotes(quotes, self.field, self.direction)
    }
}

/// Stable sort of `quotes` by `field` in `direction`.
pub fn sort_quotes(
    quotes: &[QuoteSnapshot],
    field: SortField,
    direction: SortDirection,
) -> Vec<QuoteSnapshot> {
    let mut sorted = quotes.to_vec();
    sorted.sort_by(|a, b| match direction {
        SortDirection::Asc => field.compare(a, b),
        SortDirection::Desc => field.compare(b, a),
    });
    sorted
}

/// Case-insensitive substring search on symbol or name. An empty term keeps all.
pub fn filter_quotes(quotes: &[QuoteSnapshot], term: &str) -> Vec<QuoteSnapshot> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return quotes.to_vec();
    }
    quotes
        .iter()
        .filter(|q| {
            q.symbol.to_lowercase().contains(&needle) || q.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, name: &str, price: f64, volume: u64, market_cap: u64) -> QuoteSnapshot {
        QuoteSnapshot {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change: 0.0,
            change_percent: price / 100.0,
            open: price,
            high: price,
            low: price,
            volume,
            market_cap,
            currency: "NPR".to_string(),
        }
    }

    fn table() -> Vec<QuoteSnapshot> {
        vec![
            quote("NABIL.NP", "Nabil Bank Limited", 500.0, 3000, 20_000_000_000),
            quote("NTC.NP", "Nepal Doorsanchar Company Limited", 800.0, 1000, 90_000_000_000),
            quote("ADBL.NP", "Agricultural Development Bank Limited", 300.0, 3000, 5_000_000_000),
        ]
    }

    fn symbols(quotes: &[QuoteSnapshot]) -> Vec<&str> {
        quotes.iter().map(|q| q.symbol.as_str()).collect()
    }

    #[test]
    fn default_is_market_cap_descending() {
        let sorted = SortState::default().apply(&table());
        assert_eq!(symbols(&sorted), vec!["NTC.NP", "NABIL.NP", "ADBL.NP"]);
    }

    #[test]
    fn ascending_by_symbol_and_price() {
        let by_symbol = sort_quotes(&table(), SortField::Symbol, SortDirection::Asc);
        assert_eq!(symbols(&by_symbol), vec!["ADBL.NP", "NABIL.NP", "NTC.NP"]);
        let by_price = sort_quotes(&table(), SortField::Price, SortDirection::Asc);
        assert_eq!(symbols(&by_price), vec!["ADBL.NP", "NABIL.NP", "NTC.NP"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let by_volume = sort_quotes(&table(), SortField::Volume, SortDirection::Desc);
        assert_eq!(symbols(&by_volume), vec!["NABIL.NP", "ADBL.NP", "NTC.NP"]);
    }

    #[test]
    fn selecting_same_field_toggles() {
        let state = SortState::default().select(SortField::MarketCap);
        assert_eq!(state.direction, SortDirection::Asc);
        let state = state.select(SortField::Volume);
        assert_eq!(state.field, SortField::Volume);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("changePercent".parse::<SortField>().ok(), Some(SortField::ChangePercent));
        assert_eq!("marketcap".parse::<SortField>().ok(), Some(SortField::MarketCap));
    }

    #[test]
    fn search_matches_symbol_or_name() {
        assert_eq!(symbols(&filter_quotes(&table(), "bank")), vec!["NABIL.NP", "ADBL.NP"]);
        assert_eq!(symbols(&filter_quotes(&table(), "ntc")), vec!["NTC.NP"]);
        assert_eq!(filter_quotes(&table(), "  ").len(), 3);
        assert!(filter_quotes(&table(), "hydro").is_empty());
    }
}
