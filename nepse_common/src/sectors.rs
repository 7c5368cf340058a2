//! The fixed set of market sectors reported by the dashboard.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

/// Market sector, in reporting order.
///
/// `Display` yields the human-readable name; [`Sector::id`] yields the lowercase
/// identifier.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, AsRefStr, EnumIter, Hash, Eq, PartialEq,
)]
pub enum Sector {
    Banking,
    Hydropower,
    Insurance,
    Microfinance,
    Investment,
    Manufacturing,
    Hotels,
    Trading,
    Others,
}

impl Sector {
    /// Lowercase identifier, e.g. `hydropower`.
    pub fn id(&self) -> String {
        self.as_ref().to_lowercase()
    }
}
