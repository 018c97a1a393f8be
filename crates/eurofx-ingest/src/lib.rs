//! Feed ingestion coordinator for eurofx.
//!
//! This crate connects the feed and the store:
//!
//! - [`Ingestor`] - Selects a feed, fetches, parses and persists new dates
//! - [`IngestReport`] - What a run stored, skipped and failed to store
//! - [`IngestError`] - Failures that abort a run

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/eurofx/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod ingestor;
mod report;

pub use error::IngestError;
pub use ingestor::Ingestor;
pub use report::{IngestReport, PersistFailure};
