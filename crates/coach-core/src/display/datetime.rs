//! DateTime display utilities.
//!
//! Timestamps are shown in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
//! Backend records frequently lack a creation time, so [`MaybeDateTime`]
//! covers the optional case.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A `Timestamp` formatted in the system timezone.
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

/// An optional `Timestamp`; absent values print as `unknown`.
pub struct MaybeDateTime<'a>(pub Option<&'a Timestamp>);

impl fmt::Display for MaybeDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(timestamp) => LocalDateTime(timestamp).fmt(f),
            None => f.write_str("unknown"),
        }
    }
}
