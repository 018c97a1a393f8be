//! Rate derivation and query service for eurofx.
//!
//! This crate provides the read side of eurofx:
//!
//! - [`rebase`] / [`rebase_on`] - Re-express a set of quotes against another currency
//! - [`filter_symbols`] - Narrow quotes to a requested list of currencies
//! - [`RateService`] - Latest, single-date and date-range queries over a [`eurofx_store::RateStore`]

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/eurofx/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod derive;
mod filter;
mod service;

pub use derive::{DerivationError, base_rate, rebase, rebase_on};
pub use filter::filter_symbols;
pub use service::{QueryError, RateQuery, RateService};
