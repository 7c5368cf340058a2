//! Instrument catalog shared by the engine and the feed.
//!
//! The catalog is a fixed, ordered set of NEPSE-listed companies. `Ticker` is the
//! strongly-typed handle; `Instrument` is the plain `{symbol, name}` record handed to
//! the quote generators.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Exchange suffix appended to every catalog symbol.
pub const SYMBOL_SUFFIX: &str = ".NP";

/// Set of listed symbols, in catalog order.
///
/// Parsing accepts both the bare code and the suffixed symbol, case-insensitively
/// (`nabil`, `NABIL.NP`). `Display` always yields the suffixed form.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum Ticker {
    #[strum(to_string = "NABIL.NP", serialize = "NABIL")]
    NABIL,
    #[strum(to_string = "ADBL.NP", serialize = "ADBL")]
    ADBL,
    #[strum(to_string = "NMB.NP", serialize = "NMB")]
    NMB,
    #[strum(to_string = "SBL.NP", serialize = "SBL")]
    SBL,
    #[strum(to_string = "KBL.NP", serialize = "KBL")]
    KBL,
    #[strum(to_string = "MBL.NP", serialize = "MBL")]
    MBL,
    #[strum(to_string = "EBL.NP", serialize = "EBL")]
    EBL,
    #[strum(to_string = "SBI.NP", serialize = "SBI")]
    SBI,
    #[strum(to_string = "HBL.NP", serialize = "HBL")]
    HBL,
    #[strum(to_string = "SCB.NP", serialize = "SCB")]
    SCB,
    #[strum(to_string = "CZBIL.NP", serialize = "CZBIL")]
    CZBIL,
    #[strum(to_string = "PCBL.NP", serialize = "PCBL")]
    PCBL,
    #[strum(to_string = "SANIMA.NP", serialize = "SANIMA")]
    SANIMA,
    #[strum(to_string = "NBL.NP", serialize = "NBL")]
    NBL,
    #[strum(to_string = "GBIME.NP", serialize = "GBIME")]
    GBIME,
    #[strum(to_string = "NICA.NP", serialize = "NICA")]
    NICA,
    #[strum(to_string = "BBC.NP", serialize = "BBC")]
    BBC,
    #[strum(to_string = "NRIC.NP", serialize = "NRIC")]
    NRIC,
    #[strum(to_string = "NTC.NP", serialize = "NTC")]
    NTC,
}

impl Ticker {
    /// Company display name.
    pub fn name(&self) -> &'static str {
        match self {
            Ticker::NABIL => "Nabil Bank Limited",
            Ticker::ADBL => "Agricultural Development Bank Limited",
            Ticker::NMB => "NMB Bank Limited",
            Ticker::SBL => "Siddhartha Bank Limited",
            Ticker::KBL => "Kumari Bank Limited",
            Ticker::MBL => "Machhapuchchhre Bank Limited",
            Ticker::EBL => "Everest Bank Limited",
            Ticker::SBI => "Nepal SBI Bank Limited",
            Ticker::HBL => "Himalayan Bank Limited",
            Ticker::SCB => "Standard Chartered Bank Nepal Limited",
            Ticker::CZBIL => "Citizens Bank International Limited",
            Ticker::PCBL => "Prime Commercial Bank Limited",
            Ticker::SANIMA => "Sanima Bank Limited",
            Ticker::NBL => "Nepal Bank Limited",
            Ticker::GBIME => "Global IME Bank Limited",
            Ticker::NICA => "NIC Asia Bank Limited",
            Ticker::BBC => "Bishal Bazar Company Limited",
            Ticker::NRIC => "Nepal Reinsurance Company Limited",
            Ticker::NTC => "Nepal Doorsanchar Company Limited",
        }
    }

    /// Build the catalog record for this ticker.
    pub fn instrument(&self) -> Instrument {
        Instrument::new(&self.to_string(), self.name())
    }
}

/// A tradable symbol together with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instrument {
    /// Exchange symbol, e.g. `NABIL.NP`.
    pub symbol: String,
    /// Company display name.
    pub name: String,
}

impl Instrument {
    /// Creates a new instrument record.
    pub fn new(symbol: &str, name: &str) -> Self {
        Instrument {
            symbol: String::from(symbol),
            name: String::from(name),
        }
    }
}

impl From<Ticker> for Instrument {
    fn from(ticker: Ticker) -> Self {
        ticker.instrument()
    }
}

/// Every catalog instrument in declaration order.
pub fn list_instruments() -> Vec<Instrument> {
    Ticker::iter().map(Instrument::from).collect()
}
