//! Output formatters for eurofx rate sets.
//!
//! This crate provides formatters for writing dated rate sets:
//!
//! - [`TableFormatter`] - Aligned, human-readable text
//! - [`CsvFormatter`] - CSV format, one row per quote
//! - [`JsonFormatter`] - JSON array of rate sets
//! - [`NdjsonFormatter`] - Newline-delimited JSON, one record per quote

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/eurofx/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod table;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, NdjsonFormatter};
pub use table::TableFormatter;
