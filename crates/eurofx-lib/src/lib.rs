//! ECB euro reference-rate history: ingestion, storage and queries.
//!
//! This is a facade crate that re-exports functionality from the eurofx
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use eurofx_lib::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(SqliteStore::open(SqliteStore::default_path())?);
//!
//!     let ingestor = Ingestor::new(FeedClient::with_defaults()?, Arc::clone(&store));
//!     println!("{}", ingestor.run().await?);
//!
//!     let service = RateService::new(store);
//!     let latest = service.latest(&RateQuery::new().with_base("USD").with_symbols(["BRL"]))?;
//!     println!("{latest}");
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/eurofx/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use eurofx_types::*;

// Re-export feed access
pub use eurofx_feed::{
    ClientConfig, FeedClient, FeedEntry, FeedError, FeedFetcher, FeedKind, FeedParser, FeedUrls,
    FetchError, HISTORY_START_DATE, parse_feed,
};

// Re-export storage
pub use eurofx_store::{MemoryStore, RateStore, SqliteStore, StoreError, Stored};

// Re-export ingestion
#[cfg(feature = "ingest")]
pub use eurofx_ingest::{IngestError, IngestReport, Ingestor, PersistFailure};

// Re-export queries
#[cfg(feature = "query")]
pub use eurofx_query::{
    DerivationError, QueryError, RateQuery, RateService, base_rate, filter_symbols, rebase,
    rebase_on,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use eurofx_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, NdjsonFormatter, OutputFormat,
    TableFormatter,
};

/// Prelude module for convenient imports.
///
/// ```
/// use eurofx_lib::prelude::*;
/// ```
pub mod prelude {
    pub use eurofx_types::{BASE_CURRENCY, DateRange, DatedRateSet, Quote};

    pub use eurofx_feed::{ClientConfig, FeedClient, FeedFetcher, FeedKind, FeedUrls};

    pub use eurofx_store::{MemoryStore, RateStore, SqliteStore};

    #[cfg(feature = "ingest")]
    pub use eurofx_ingest::{IngestReport, Ingestor};

    #[cfg(feature = "query")]
    pub use eurofx_query::{RateQuery, RateService};

    #[cfg(feature = "format")]
    pub use eurofx_format::{Formatter, OutputFormat};
}
