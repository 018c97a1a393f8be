//! Repository interface over stored rate sets.

use eurofx_types::DatedRateSet;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite reported an error.
    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to create the directory holding the database.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A stored row could not be read back into a rate set.
    #[error("Corrupt rate set {date}: {reason}")]
    Corrupt {
        /// Date of the affected set.
        date: String,
        /// What was wrong with the row.
        reason: String,
    },

    /// A previous writer panicked while holding the store lock.
    #[error("Store lock poisoned")]
    Poisoned,
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Outcome of [`RateStore::find_or_create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stored {
    /// The set as held by the store after the call.
    pub set: DatedRateSet,
    /// True if the call inserted the set, false if the date already existed.
    pub created: bool,
}

impl Stored {
    /// Outcome for a freshly inserted set.
    #[must_use]
    pub const fn created(set: DatedRateSet) -> Self {
        Self { set, created: true }
    }

    /// Outcome for a date that was already stored.
    #[must_use]
    pub const fn existing(set: DatedRateSet) -> Self {
        Self {
            set,
            created: false,
        }
    }
}

/// Storage of dated rate sets.
///
/// Implementations hold at most one set per date and never modify a stored
/// set. "Latest" is defined by insertion order, not by comparing dates.
/// Calls block the current thread.
pub trait RateStore: Send + Sync {
    /// Returns the set stored for `date`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    fn find_by_date(&self, date: &str) -> Result<Option<DatedRateSet>>;

    /// Returns the most recently inserted set, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    fn find_latest(&self) -> Result<Option<DatedRateSet>>;

    /// Returns all sets with `start <= date <= end`, in ascending date order.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    fn find_in_range(&self, start: &str, end: &str) -> Result<Vec<DatedRateSet>>;

    /// Inserts `set` unless a set with the same date exists.
    ///
    /// Safe to call concurrently for the same date: exactly one caller
    /// observes `created == true`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    fn find_or_create(&self, set: DatedRateSet) -> Result<Stored>;

    /// Returns true if a set is stored for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    fn exists_with_date(&self, date: &str) -> Result<bool>;

    /// Returns the number of stored sets.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    fn count(&self) -> Result<usize>;

    /// Deletes every stored set.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    fn clear(&self) -> Result<()>;
}

impl<S: RateStore + ?Sized> RateStore for &S {
    fn find_by_date(&self, date: &str) -> Result<Option<DatedRateSet>> {
        (**self).find_by_date(date)
    }

    fn find_latest(&self) -> Result<Option<DatedRateSet>> {
        (**self).find_latest()
    }

    fn find_in_range(&self, start: &str, end: &str) -> Result<Vec<DatedRateSet>> {
        (**self).find_in_range(start, end)
    }

    fn find_or_create(&self, set: DatedRateSet) -> Result<Stored> {
        (**self).find_or_create(set)
    }

    fn exists_with_date(&self, date: &str) -> Result<bool> {
        (**self).exists_with_date(date)
    }

    fn count(&self) -> Result<usize> {
        (**self).count()
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

impl<S: RateStore + ?Sized> RateStore for Arc<S> {
    fn find_by_date(&self, date: &str) -> Result<Option<DatedRateSet>> {
        (**self).find_by_date(date)
    }

    fn find_latest(&self) -> Result<Option<DatedRateSet>> {
        (**self).find_latest()
    }

    fn find_in_range(&self, start: &str, end: &str) -> Result<Vec<DatedRateSet>> {
        (**self).find_in_range(start, end)
    }

    fn find_or_create(&self, set: DatedRateSet) -> Result<Stored> {
        (**self).find_or_create(set)
    }

    fn exists_with_date(&self, date: &str) -> Result<bool> {
        (**self).exists_with_date(date)
    }

    fn count(&self) -> Result<usize> {
        (**self).count()
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
