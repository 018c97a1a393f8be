//! Date keys and inclusive date ranges.

use chrono::NaiveDate;

use crate::{DateError, DateRangeError};

/// Format of every date key stored and queried by eurofx.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date key.
///
/// Keys must be zero-padded so that lexicographic comparison of the stored
/// strings matches chronological order.
///
/// # Errors
///
/// Returns an error if the value is not a zero-padded calendar date.
pub fn parse_date_key(value: &str) -> Result<NaiveDate, DateError> {
    if value.len() != 10 {
        return Err(DateError::Invalid(value.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
        .map_err(|_| DateError::Invalid(value.to_string()))
}

/// A range of dates for history queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses a date range from two `YYYY-MM-DD` keys.
    ///
    /// # Errors
    ///
    /// Returns an error if either key is malformed or start > end.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        Self::new(parse_date_key(start)?, parse_date_key(end)?)
    }

    /// Returns the start bound as a storage key.
    #[must_use]
    pub fn start_key(&self) -> String {
        self.start.format(DATE_KEY_FORMAT).to_string()
    }

    /// Returns the end bound as a storage key.
    #[must_use]
    pub fn end_key(&self) -> String {
        self.end.format(DATE_KEY_FORMAT).to_string()
    }

    /// Returns the number of calendar days in the range, both bounds included.
    #[must_use]
    pub fn total_days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs() + 1
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
