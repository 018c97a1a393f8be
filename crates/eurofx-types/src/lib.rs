//! Core types for the eurofx exchange-rate history service.
//!
//! This crate provides the fundamental data structures used throughout eurofx:
//!
//! - [`Quote`] - One currency's exchange value within a dated set
//! - [`DatedRateSet`] - All quotes published for one calendar date
//! - [`DateRange`] - Inclusive range of dates for history queries
//! - [`parse_date_key`] - Validation of `YYYY-MM-DD` date keys

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/eurofx/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod rate;

pub use date_range::{DATE_KEY_FORMAT, DateRange, parse_date_key};
pub use error::{DateError, DateRangeError};
pub use rate::{BASE_CURRENCY, DatedRateSet, Quote};
