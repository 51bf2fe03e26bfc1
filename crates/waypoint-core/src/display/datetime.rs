//! DateTime display utilities.
//!
//! Wrapper types for formatting timestamps in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM:SS TZ` in the system timezone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM` in the given timezone, for
/// compact history entries.
pub struct ShortDateTime<'a> {
    pub timestamp: &'a Timestamp,
    pub time_zone: TimeZone,
}

impl<'a> ShortDateTime<'a> {
    /// Short format in the system timezone.
    pub fn local(timestamp: &'a Timestamp) -> Self {
        Self {
            timestamp,
            time_zone: TimeZone::system(),
        }
    }
}

impl fmt::Display for ShortDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.time_zone.clone())
                .strftime("%Y-%m-%d %H:%M")
        )
    }
}
