use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Textual format accepted at every boundary (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar day without time or time zone.
///
/// Ordering and equality are the natural chronological ones, so dates can be
/// compared directly when testing reservations for overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Returns `None` for dates that do not exist (e.g. February 30th).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if !has_iso_shape(trimmed) {
            return Err(Error::InvalidDateError(format!("'{}' is not a YYYY-MM-DD date", trimmed)));
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(CalendarDate)
            .map_err(|e| Error::InvalidDateError(format!("'{}' is not a YYYY-MM-DD date ({})", trimmed, e)))
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &CalendarDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }
}

/// Exactly four year digits, two month digits and two day digits, zero padded.
/// chrono alone also takes `24-06-01`, `2024-6-1` or `+2024-06-01`.
fn has_iso_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CalendarDate::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = CalendarDate::parse("2024-06-01").unwrap();
        assert_eq!(date, CalendarDate::from_ymd(2024, 6, 1).unwrap());
        assert_eq!(date.to_string(), "2024-06-01");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(CalendarDate::parse("  2024-06-01\n").unwrap().to_string(), "2024-06-01");
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "tomorrow", "2024/06/01", "01-06-2024", "2024-02-30", "2024-13-01", "2024-00-10", "2024-06-1x"] {
            assert!(matches!(CalendarDate::parse(input), Err(Error::InvalidDateError(_))), "accepted '{}'", input);
        }
    }

    #[test]
    fn rejects_non_canonical_spellings() {
        for input in ["2024-6-1", "24-06-01", "+2024-06-01", "2024-06-1", "2024-06-001", "02024-06-01", "２０２４-06-01"] {
            assert!(matches!(CalendarDate::parse(input), Err(Error::InvalidDateError(_))), "accepted '{}'", input);
        }
    }

    #[test]
    fn orders_chronologically() {
        let early = CalendarDate::parse("2023-12-31").unwrap();
        let late = CalendarDate::parse("2024-01-01").unwrap();
        assert!(early < late);
        assert_eq!(early.days_until(&late), 1);
        assert_eq!(late.days_until(&early), -1);
    }
}
