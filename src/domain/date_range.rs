//! Inclusive date-range bounds for note listing

use crate::error::{NotesError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// An inclusive `[start, end]` bound on note timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    /// Build a range from explicit bounds
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        DateRange { start, end }
    }

    /// Parse a range from two `YYYY-MM-DD` strings.
    ///
    /// The start bound resolves to midnight; the end bound is normalized to
    /// the end of its calendar day (23:59:59) so day-level input covers the
    /// whole day.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start_day = parse_day(start)?;
        let end_day = parse_day(end)?;

        let end_of_day = end_day
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| NotesError::InvalidDate(end.trim().to_string()))?;

        Ok(DateRange {
            start: start_day.and_time(NaiveTime::MIN),
            end: end_of_day,
        })
    }

    /// Inclusive membership test
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

fn parse_day(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| NotesError::InvalidDate(trimmed.to_string()))
}
