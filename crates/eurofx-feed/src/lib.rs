//! ECB reference-rate feed fetching and parsing for eurofx.
//!
//! This crate provides the upstream side of the ingestion pipeline:
//!
//! - [`url::FeedKind`] / [`url::FeedUrls`] - Full-history and recent-window feed locations
//! - [`FeedClient`] - HTTP client with a bounded request timeout
//! - [`FeedFetcher`] - Seam for swapping the transport (used by tests)
//! - [`parse_feed`] - Lazy time-series XML parser

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/eurofx/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod parse;
pub mod url;

pub use client::{ClientConfig, FeedClient, FeedFetcher, FetchError};
pub use parse::{FeedEntry, FeedError, FeedParser, parse_feed};
pub use url::{FeedKind, FeedUrls, HISTORY_START_DATE};
