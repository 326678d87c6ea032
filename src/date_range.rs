use crate::error::BookingError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Half-open interval of calendar dates: the start night is included, the
/// checkout date is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, BookingError> {
        if start > end {
            return Err(BookingError::InvalidRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// Builds a range from two `DD-MM-YYYY` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, BookingError> {
        DateRange::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    pub fn nights(&self) -> u32 {
        // start <= end holds, so the difference is never negative
        (self.end - self.start).num_days() as u32
    }
}

pub fn parse_date(text: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| BookingError::InvalidDate(text.to_string()))
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}
