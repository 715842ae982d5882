//! Text formatting for the time, date and epoch readouts.
//!
//! Every readout lives in a fixed-capacity `heapless::String`, so formatting never
//! allocates. Writers go through [`Truncating`], which stops at capacity instead of
//! failing; a value that does not fit is cut, never overflowed.
//!
//! | Readout | Pattern | Capacity | Example |
//! |---------|---------|----------|---------|
//! | Time (24h) | `%H:%M` | 5 | `09:05` |
//! | Time (12h) | `%I:%M` | 5 | `09:05`, `12:00` |
//! | Date | `%a, %d %b` | 15 | `Tue, 14 Nov` |
//! | Epoch | signed decimal | 20 | `1700000000` |
//!
//! The epoch buffer holds every `i64`, so the readout keeps working past the
//! 10-digit rollover in 2001 and the 11-digit one in 2286.

use core::fmt::{self, Write};

use chrono::{Datelike, NaiveDateTime, Timelike};
use heapless::String;

use crate::host::ClockStyle;

// =============================================================================
// Buffer Capacities
// =============================================================================

/// `HH:MM`.
pub const TIME_CAPACITY: usize = 5;

/// `Www, DD Mmm` fits with room to spare (16-byte buffer minus terminator).
pub const DATE_CAPACITY: usize = 15;

/// Enough for `i64::MIN` (`-9223372036854775808`).
pub const EPOCH_CAPACITY: usize = 20;

pub type TimeText = String<TIME_CAPACITY>;
pub type DateText = String<DATE_CAPACITY>;
pub type EpochText = String<EPOCH_CAPACITY>;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// =============================================================================
// Truncating Writer
// =============================================================================

/// `fmt::Write` adaptor that silently drops whatever does not fit.
pub struct Truncating<'a, const N: usize>(pub &'a mut String<N>);

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Copy `text` into a fixed-capacity string, cutting at capacity.
pub fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    let _ = Truncating(&mut out).write_str(text);
    out
}

// =============================================================================
// Readout Formatters
// =============================================================================

/// Format the wall-clock time as `HH:MM` (24h) or `II:MM` (12h, hour 01-12).
///
/// The 12-hour form keeps its leading zero: 09:05 renders as `09:05` in both styles.
pub fn format_time(
    local: &NaiveDateTime,
    style: ClockStyle,
) -> TimeText {
    let hour = match style {
        ClockStyle::TwentyFourHour => local.hour(),
        ClockStyle::TwelveHour => local.hour12().1,
    };

    let mut out = TimeText::new();
    let _ = write!(Truncating(&mut out), "{hour:02}:{:02}", local.minute());
    out
}

/// Format the date as abbreviated weekday, zero-padded day and abbreviated month.
pub fn format_date(local: &NaiveDateTime) -> DateText {
    let weekday = WEEKDAYS[local.weekday().num_days_from_monday() as usize];
    let month = MONTHS[local.month0() as usize];

    let mut out = DateText::new();
    let _ = write!(Truncating(&mut out), "{weekday}, {:02} {month}", local.day());
    out
}

/// Format a Unix timestamp as a signed decimal.
pub fn format_epoch(unix: i64) -> EpochText {
    let mut out = EpochText::new();
    let _ = write!(Truncating(&mut out), "{unix}");
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(
        y: i32,
        m: u32,
        d: u32,
        h: u32,
        min: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_time_24h_morning() {
        let t = at(2024, 3, 3, 9, 5);
        assert_eq!(format_time(&t, ClockStyle::TwentyFourHour).as_str(), "09:05");
    }

    #[test]
    fn test_time_12h_keeps_leading_zero() {
        let t = at(2024, 3, 3, 9, 5);
        assert_eq!(format_time(&t, ClockStyle::TwelveHour).as_str(), "09:05");
    }

    #[test]
    fn test_time_12h_afternoon_wraps() {
        let t = at(2024, 3, 3, 21, 30);
        assert_eq!(format_time(&t, ClockStyle::TwelveHour).as_str(), "09:30");
        assert_eq!(format_time(&t, ClockStyle::TwentyFourHour).as_str(), "21:30");
    }

    #[test]
    fn test_time_12h_midnight_and_noon() {
        assert_eq!(format_time(&at(2024, 3, 3, 0, 0), ClockStyle::TwelveHour).as_str(), "12:00");
        assert_eq!(format_time(&at(2024, 3, 3, 12, 0), ClockStyle::TwelveHour).as_str(), "12:00");
        assert_eq!(format_time(&at(2024, 3, 3, 0, 0), ClockStyle::TwentyFourHour).as_str(), "00:00");
    }

    #[test]
    fn test_time_always_five_chars() {
        for hour in 0..24 {
            let t = at(2024, 1, 1, hour, 59);
            assert_eq!(format_time(&t, ClockStyle::TwentyFourHour).len(), 5);
            assert_eq!(format_time(&t, ClockStyle::TwelveHour).len(), 5);
        }
    }

    #[test]
    fn test_date_format() {
        // 2023-11-14 is a Tuesday
        assert_eq!(format_date(&at(2023, 11, 14, 22, 13)).as_str(), "Tue, 14 Nov");
        // 2024-03-03 is a Sunday
        assert_eq!(format_date(&at(2024, 3, 3, 0, 0)).as_str(), "Sun, 03 Mar");
        // 2024-01-01 is a Monday
        assert_eq!(format_date(&at(2024, 1, 1, 0, 0)).as_str(), "Mon, 01 Jan");
    }

    #[test]
    fn test_epoch_ten_digits() {
        assert_eq!(format_epoch(1_700_000_000).as_str(), "1700000000");
    }

    #[test]
    fn test_epoch_nine_digit_boundary() {
        assert_eq!(format_epoch(999_999_999).as_str(), "999999999");
        assert_eq!(format_epoch(1_000_000_000).as_str(), "1000000000");
    }

    #[test]
    fn test_epoch_extremes_fit() {
        assert_eq!(format_epoch(0).as_str(), "0");
        assert_eq!(format_epoch(-1).as_str(), "-1");
        assert_eq!(format_epoch(i64::MIN).as_str(), "-9223372036854775808");
        assert_eq!(format_epoch(i64::MAX).as_str(), "9223372036854775807");
    }

    #[test]
    fn test_truncating_writer_cuts_at_capacity() {
        let mut s: String<5> = String::new();
        let _ = write!(Truncating(&mut s), "{}", 1_234_567);
        assert_eq!(s.as_str(), "12345");
    }

    #[test]
    fn test_truncated_copy() {
        let s: String<4> = truncated("NOTHING");
        assert_eq!(s.as_str(), "NOTH");
        let s: String<16> = truncated("00:00");
        assert_eq!(s.as_str(), "00:00");
    }
}
