//! Error types for date handling.

use chrono::NaiveDate;
use thiserror::Error;

/// Error for malformed date keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The value is not a zero-padded `YYYY-MM-DD` date.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    Invalid(String),
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },

    /// One of the bounds is not a valid date.
    #[error(transparent)]
    Date(#[from] DateError),
}
