use std::fmt;

use crate::domain::calendar_date::CalendarDate;
use crate::error::{Error, Result};

/// A stay from the check-in day `from` up to the check-out day `to`.
///
/// `from` is always strictly before `to`; constructing an inverted or empty
/// range fails with [`Error::InvalidDateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    from: CalendarDate,
    to: CalendarDate,
}

/// Open-interval membership: `lower < value < upper`.
fn strictly_between(value: CalendarDate, lower: CalendarDate, upper: CalendarDate) -> bool {
    lower < value && value < upper
}

impl DateRange {
    pub fn new(from: CalendarDate, to: CalendarDate) -> Result<Self> {
        if from >= to {
            return Err(Error::InvalidDateError(format!("check-out {} must be after check-in {}", to, from)));
        }
        Ok(DateRange { from, to })
    }

    /// Parses both ends as `YYYY-MM-DD` and validates their order.
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        DateRange::new(CalendarDate::parse(from)?, CalendarDate::parse(to)?)
    }

    pub fn from_date(&self) -> CalendarDate {
        self.from
    }

    pub fn to_date(&self) -> CalendarDate {
        self.to
    }

    pub fn nights(&self) -> i64 {
        self.from.days_until(&self.to)
    }

    /// Returns true if the two stays collide.
    ///
    /// A collision means one range has an endpoint strictly inside the other.
    /// Touching endpoints are not a collision, so a guest may check in on the
    /// day the previous guest checks out. Two identical ranges collide as well.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        strictly_between(other.from, self.from, self.to)
            || strictly_between(other.to, self.from, self.to)
            || strictly_between(self.from, other.from, other.to)
            || strictly_between(self.to, other.from, other.to)
            || self == other
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}
