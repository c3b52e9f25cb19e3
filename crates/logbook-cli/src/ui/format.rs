//! String formatting utilities for UI rendering.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Weekday, month, day, year and 12-hour time, e.g.
/// `Friday March 01, 2024 09:05AM`.
pub const TIMESTAMP_FORMAT: &str = "%A %B %d, %Y %I:%M%p";

/// Format a timestamp in the given zone.
pub fn format_timestamp<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Format a stored timestamp in the user's local zone.
pub fn format_local_timestamp(dt: &DateTime<Utc>) -> String {
    format_timestamp(&dt.with_timezone(&Local))
}

/// A line of `ch` as wide as `text`.
pub fn underline(text: &str, ch: char) -> String {
    ch.to_string().repeat(text.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_morning() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        assert_eq!(format_timestamp(&dt), "Friday March 01, 2024 09:05AM");
    }

    #[test]
    fn test_format_timestamp_evening() {
        let dt = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(format_timestamp(&dt), "Sunday December 31, 2023 11:59PM");
    }

    #[test]
    fn test_underline_matches_width() {
        assert_eq!(underline("abc", '='), "===");
        assert_eq!(underline("héllo", '-'), "-----");
        assert_eq!(underline("", '='), "");
    }
}
