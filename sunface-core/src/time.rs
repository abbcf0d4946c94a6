//! Wall-clock conversion and text formatting
//!
//! The face shows minute resolution only. Time zones are fixed UTC offsets
//! looked up from the host whenever it reports a change.

use core::fmt::Write;

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Timelike, Utc};
use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of any text drawn on the face
pub const MAX_LABEL_LEN: usize = 32;

/// Text drawn on the face
pub type Label = String<MAX_LABEL_LEN>;

/// Largest accepted offset from UTC (exclusive of a full day)
pub const MAX_OFFSET_SECS: i32 = 86_399;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Time zone as a fixed offset from UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeZone {
    offset_secs: i32,
}

impl TimeZone {
    pub const UTC: TimeZone = TimeZone { offset_secs: 0 };

    /// Create a time zone from an offset in seconds east of UTC
    ///
    /// Offsets of a full day or more are not real zones and fall back to UTC.
    pub fn from_offset_secs(offset_secs: i32) -> Self {
        if (-MAX_OFFSET_SECS..=MAX_OFFSET_SECS).contains(&offset_secs) {
            Self { offset_secs }
        } else {
            Self::UTC
        }
    }

    /// Create a time zone from an offset in minutes east of UTC
    pub fn from_offset_minutes(offset_minutes: i32) -> Self {
        Self::from_offset_secs(offset_minutes.saturating_mul(60))
    }

    /// Offset from UTC in seconds
    pub fn offset_secs(&self) -> i32 {
        self.offset_secs
    }

    /// Convert a Unix timestamp in milliseconds to local time
    ///
    /// Timestamps outside the calendar range render as the Unix epoch.
    pub fn local_time(&self, now_ms: i64) -> NaiveDateTime {
        let utc = DateTime::<Utc>::from_timestamp_millis(now_ms)
            .map(|dt| dt.naive_utc())
            .unwrap_or_default();

        utc.checked_add_signed(Duration::seconds(i64::from(self.offset_secs)))
            .unwrap_or(utc)
    }
}

/// Format the time of day as zero-padded 24-hour `HH:MM`
pub fn format_time(local: &NaiveDateTime) -> Label {
    let mut label = Label::new();
    let _ = write!(label, "{:02}:{:02}", local.hour(), local.minute());
    label
}

/// Format a temperature as whole degrees with a degree sign
pub fn format_temperature(celsius: i32) -> Label {
    let mut label = Label::new();
    let _ = write!(label, "{}\u{00b0}", celsius);
    label
}

/// Locale-aware date text, supplied by the host
pub trait DateFormatter {
    /// Format the date part of a local timestamp
    fn format_date(&self, local: &NaiveDateTime) -> Label;
}

/// English abbreviated long date, e.g. `Mon, Oct 19, 2026`
#[derive(Debug, Clone, Copy, Default)]
pub struct AbbreviatedDate;

impl DateFormatter for AbbreviatedDate {
    fn format_date(&self, local: &NaiveDateTime) -> Label {
        let mut label = Label::new();
        let _ = write!(
            label,
            "{}, {} {}, {}",
            WEEKDAYS[local.weekday().num_days_from_monday() as usize],
            MONTHS[local.month0() as usize],
            local.day(),
            local.year()
        );
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2026-10-19 14:05:09.500 UTC, a Monday
    const MONDAY_AFTERNOON_MS: i64 = 1_792_418_709_500;

    #[test]
    fn test_format_time_utc() {
        let local = TimeZone::UTC.local_time(MONDAY_AFTERNOON_MS);
        assert_eq!(format_time(&local).as_str(), "14:05");
    }

    #[test]
    fn test_format_time_offset() {
        let cet = TimeZone::from_offset_minutes(60);
        assert_eq!(format_time(&cet.local_time(MONDAY_AFTERNOON_MS)).as_str(), "15:05");

        let pst = TimeZone::from_offset_secs(-8 * 3600);
        assert_eq!(format_time(&pst.local_time(MONDAY_AFTERNOON_MS)).as_str(), "06:05");
    }

    #[test]
    fn test_format_time_zero_padded() {
        let local = TimeZone::UTC.local_time(0);
        assert_eq!(format_time(&local).as_str(), "00:00");
    }

    #[test]
    fn test_offset_crosses_midnight() {
        let tokyo = TimeZone::from_offset_secs(9 * 3600);
        let local = tokyo.local_time(MONDAY_AFTERNOON_MS);
        assert_eq!(format_time(&local).as_str(), "23:05");

        let far_east = TimeZone::from_offset_secs(14 * 3600);
        let local = far_east.local_time(MONDAY_AFTERNOON_MS);
        assert_eq!(format_time(&local).as_str(), "04:05");
        assert_eq!(AbbreviatedDate.format_date(&local).as_str(), "Tue, Oct 20, 2026");
    }

    #[test]
    fn test_abbreviated_date() {
        let local = TimeZone::UTC.local_time(MONDAY_AFTERNOON_MS);
        assert_eq!(AbbreviatedDate.format_date(&local).as_str(), "Mon, Oct 19, 2026");

        let epoch = TimeZone::UTC.local_time(0);
        assert_eq!(AbbreviatedDate.format_date(&epoch).as_str(), "Thu, Jan 1, 1970");
    }

    #[test]
    fn test_invalid_offsets_fall_back_to_utc() {
        assert_eq!(TimeZone::from_offset_secs(86_400), TimeZone::UTC);
        assert_eq!(TimeZone::from_offset_secs(i32::MIN), TimeZone::UTC);
        assert_eq!(TimeZone::from_offset_minutes(i32::MAX), TimeZone::UTC);
        assert_eq!(TimeZone::from_offset_secs(-MAX_OFFSET_SECS).offset_secs(), -MAX_OFFSET_SECS);
    }

    #[test]
    fn test_out_of_range_timestamp() {
        let local = TimeZone::UTC.local_time(i64::MAX);
        assert_eq!(format_time(&local).as_str(), "00:00");
        let local = TimeZone::from_offset_secs(3600).local_time(i64::MIN);
        assert_eq!(format_time(&local).as_str(), "01:00");
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(10).as_str(), "10\u{00b0}");
        assert_eq!(format_temperature(-4).as_str(), "-4\u{00b0}");
        assert_eq!(format_temperature(0).as_str(), "0\u{00b0}");
    }
}
