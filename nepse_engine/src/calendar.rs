//! Trading calendar for the exchange.
//!
//! The exchange trades Sunday through Thursday, 11:00 to 15:00 inclusive, on a fixed
//! UTC+05:45 clock. Every check shifts the caller's UTC instant onto that clock,
//! decides on the shifted wall time, and shifts any resulting instant back to UTC.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Offset of the trading clock from UTC, in minutes (5h45m).
pub const TRADING_OFFSET_MINUTES: i64 = 5 * 60 + 45;

/// Session open, in seconds after trading-clock midnight.
pub const SESSION_OPEN_SECS: u32 = 11 * 3600;

/// Session close, in seconds after trading-clock midnight. Inclusive.
pub const SESSION_CLOSE_SECS: u32 = 15 * 3600;

/// Last trading day of the week, counted from Sunday = 0.
const THURSDAY: u32 = 4;

/// Open/closed state of the market at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// `true` inside the trading window.
    pub is_open: bool,
    /// Start of the next session, in UTC.
    pub next_open: DateTime<Utc>,
}

/// Shift a UTC instant onto the trading clock.
pub fn to_trading_time(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.naive_utc() + Duration::minutes(TRADING_OFFSET_MINUTES)
}

/// Shift a trading-clock wall time back to UTC.
pub fn from_trading_time(local: NaiveDateTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&(local - Duration::minutes(TRADING_OFFSET_MINUTES)))
}

fn is_trading_day(local: &NaiveDateTime) -> bool {
    local.weekday().num_days_from_sunday() <= THURSDAY
}

fn within_session(local: &NaiveDateTime) -> bool {
    let secs = local.num_seconds_from_midnight();
    (SESSION_OPEN_SECS..=SESSION_CLOSE_SECS).contains(&secs)
}

/// `true` when `now` falls inside a trading session.
pub fn is_market_open(now: DateTime<Utc>) -> bool {
    let local = to_trading_time(now);
    is_trading_day(&local) && within_session(&local)
}

/// Start of the next session after `now`.
///
/// After the close the next session is the following trading day (Sunday after a
/// Thursday); on Friday and Saturday it is the coming Sunday; before the open it is
/// the same day. While the market is open the start of the following session is
/// returned.
pub fn next_market_open(now: DateTime<Utc>) -> DateTime<Utc> {
    let local = to_trading_time(now);
    let weekday = local.weekday().num_days_from_sunday();
    let secs = local.num_seconds_from_midnight();

    let days_ahead: u32 = match weekday {
        0..=3 if secs > SESSION_CLOSE_SECS => 1,
        THURSDAY if secs > SESSION_CLOSE_SECS => 3,
        5 | 6 => 7 - weekday,
        _ if secs < SESSION_OPEN_SECS => 0,
        THURSDAY => 3,
        _ => 1,
    };

    let open_date = local.date() + Duration::days(i64::from(days_ahead));
    let open_local =
        open_date.and_time(NaiveTime::default()) + Duration::seconds(i64::from(SESSION_OPEN_SECS));
    from_trading_time(open_local)
}

/// Session state at `now`.
pub fn session_state(now: DateTime<Utc>) -> SessionState {
    SessionState {
        is_open: is_market_open(now),
        next_open: next_market_open(now),
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_open {
            write!(f, "Market Open")
        } else {
            let local = to_trading_time(self.next_open);
            write!(f, "Market Closed • Opens {}", local.format("%A %-I:%M %p"))
        }
    }
}
