//! Simulated company profile shown next to a quote.

use nepse_common::Instrument;
use rand::Rng;
use serde::{Deserialize, Serialize};

const SUMMARY: &str = "This is a simulated business summary for a Nepalese company.";

/// Static company details with a randomised head count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockProfile {
    /// Symbol the profile belongs to.
    pub symbol: String,
    /// Street address.
    pub address1: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Contact phone.
    pub phone: String,
    /// Company web site.
    pub website: String,
    /// Industry label.
    pub industry: String,
    /// Sector label.
    pub sector: String,
    /// Free-text business summary.
    pub long_business_summary: String,
    /// Head count, in `[1000, 6000)`.
    pub full_time_employees: u32,
}

/// Build a profile for `instrument`.
pub fn generate_profile<R: Rng + ?Sized>(rng: &mut R, instrument: &Instrument) -> StockProfile {
    StockProfile {
        symbol: instrument.symbol.clone(),
        address1: String::from("Kathmandu"),
        city: String::from("Kathmandu"),
        country: String::from("Nepal"),
        phone: String::from("+977-1-4444444"),
        website: String::from("https://example.com"),
        industry: String::from("Banking"),
        sector: String::from("Financial Services"),
        long_business_summary: String::from(SUMMARY),
        full_time_employees: rng.random_range(1000..6000u32),
    }
}
