//! Clocks and the date/time fields of a log line
//!
//! Lines carry the date as `YYYY/MM/DD` and the time as `HH:MM:SS`, with an
//! optional `.uuuuuu` microsecond suffix.

use chrono::{Local, NaiveDateTime, Utc};
use std::sync::Arc;

/// Date format of the second line field
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Time format of the third line field
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Time format used when microseconds are requested
pub const TIME_FORMAT_MICROS: &str = "%H:%M:%S%.6f";

/// Source of the wall-clock time stamped on every line
pub trait Clock: Send + Sync {
    /// Current wall-clock time, in UTC when `utc` is set and local time
    /// otherwise.
    fn now(&self, utc: bool) -> NaiveDateTime;
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self, utc: bool) -> NaiveDateTime {
        if utc {
            Utc::now().naive_utc()
        } else {
            Local::now().naive_local()
        }
    }
}

/// A clock stuck at one instant, independent of the UTC setting
///
/// # Examples
///
/// ```
/// use rust_console_logger::core::{Clock, FixedClock};
///
/// let clock = FixedClock::ymd_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(clock.now(true).to_string(), "2024-01-01 00:00:00");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Build a fixed clock from calendar fields; `None` for invalid dates.
    pub fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        chrono::NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self, _utc: bool) -> NaiveDateTime {
        self.0
    }
}

/// Shared clock handle used by the line loggers
pub type SharedClock = Arc<dyn Clock>;

#[must_use]
pub fn format_date(datetime: &NaiveDateTime) -> String {
    datetime.format(DATE_FORMAT).to_string()
}

#[must_use]
pub fn format_time(datetime: &NaiveDateTime, microseconds: bool) -> String {
    let format = if microseconds {
        TIME_FORMAT_MICROS
    } else {
        TIME_FORMAT
    };
    datetime.format(format).to_string()
}
