//! Timestamp display in the system timezone.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Formats an optional save time as `YYYY-MM-DD HH:MM:SS TZ` in the system
/// timezone, or `never` when the plan has not been saved.
pub struct SavedAt<'a>(pub Option<&'a Timestamp>);

impl fmt::Display for SavedAt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(timestamp) => write!(
                f,
                "{}",
                timestamp
                    .to_zoned(TimeZone::system())
                    .strftime("%Y-%m-%d %H:%M:%S %Z")
            ),
            None => write!(f, "never"),
        }
    }
}
