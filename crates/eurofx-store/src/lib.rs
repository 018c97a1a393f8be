//! Rate set storage for the eurofx exchange-rate history service.
//!
//! This crate provides the persistence side of eurofx:
//!
//! - [`RateStore`] - Repository interface used by ingestion and queries
//! - [`Stored`] - Outcome of an idempotent find-or-create
//! - [`MemoryStore`] - In-process store kept in insertion order
//! - [`SqliteStore`] - SQLite-backed store (feature `sqlite`)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/eurofx/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod memory;
mod repository;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use memory::MemoryStore;
pub use repository::{RateStore, Result, StoreError, Stored};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
