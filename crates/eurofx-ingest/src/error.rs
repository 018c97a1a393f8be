//! Error types for ingestion runs.

use eurofx_feed::{FeedError, FetchError};
use eurofx_store::StoreError;
use thiserror::Error;

/// Errors that abort an ingestion run.
///
/// When one of these is returned nothing from the current document has been
/// stored.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The feed could not be downloaded.
    #[error("Failed to fetch feed: {0}")]
    Fetch(#[from] FetchError),

    /// The feed document is malformed.
    #[error("Malformed feed: {0}")]
    Feed(#[from] FeedError),

    /// The store could not be consulted before ingesting.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
