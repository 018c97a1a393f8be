//! Latest, single-date and date-range queries.

use crate::derive::{DerivationError, rebase};
use crate::filter::filter_symbols;
use eurofx_store::{RateStore, StoreError};
use eurofx_types::DatedRateSet;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while answering a query.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The request could not be satisfied, e.g. an unsupported base.
    #[error(transparent)]
    Derivation(#[from] DerivationError),

    /// The store failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Optional re-basing and filtering applied to every returned set.
///
/// `None` means "not requested" and is distinct from an empty symbol list,
/// although both leave the quotes unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateQuery {
    /// Currency to re-base onto. `None` keeps euro-relative values.
    pub base: Option<String>,
    /// Currencies to keep, in output order. `None` keeps all.
    pub symbols: Option<Vec<String>>,
}

impl RateQuery {
    /// Creates a query with no base and no symbol filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base currency.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Sets the requested symbols.
    #[must_use]
    pub fn with_symbols<I, T>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.symbols = Some(symbols.into_iter().map(Into::into).collect());
        self
    }

    fn apply(&self, set: DatedRateSet) -> Result<DatedRateSet, DerivationError> {
        // A date with nothing stored is an empty answer, whatever the base.
        if set.is_empty() {
            return Ok(set);
        }
        let quotes = rebase(&set.quotes, self.base.as_deref())?;
        let quotes = filter_symbols(quotes, self.symbols.as_deref());
        Ok(DatedRateSet::with_quotes(set.date, quotes))
    }
}

/// Query front end over a [`RateStore`].
#[derive(Debug, Clone)]
pub struct RateService<S> {
    store: S,
}

impl<S: RateStore> RateService<S> {
    /// Creates a service reading from `store`.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the most recently ingested set.
    ///
    /// An empty store yields an empty set with an empty date.
    ///
    /// # Errors
    ///
    /// Returns an error if the base is unsupported or the store fails.
    pub fn latest(&self, query: &RateQuery) -> Result<DatedRateSet, QueryError> {
        let set = self.store.find_latest()?.unwrap_or_default();
        debug!(date = %set.date, quotes = set.len(), "latest rate set");
        Ok(query.apply(set)?)
    }

    /// Returns the set published on `date`.
    ///
    /// A date with no stored set yields an empty set for that date.
    ///
    /// # Errors
    ///
    /// Returns an error if the base is unsupported or the store fails.
    pub fn on_date(&self, date: &str, query: &RateQuery) -> Result<DatedRateSet, QueryError> {
        let set = self
            .store
            .find_by_date(date)?
            .unwrap_or_else(|| DatedRateSet::new(date));
        debug!(date, quotes = set.len(), "dated rate set");
        Ok(query.apply(set)?)
    }

    /// Returns every set with `start <= date <= end`, in ascending date order.
    ///
    /// # Errors
    ///
    /// Returns an error if the base is unsupported for any set, or the store
    /// fails.
    pub fn in_range(
        &self,
        start: &str,
        end: &str,
        query: &RateQuery,
    ) -> Result<Vec<DatedRateSet>, QueryError> {
        let sets = self.store.find_in_range(start, end)?;
        debug!(start, end, sets = sets.len(), "rate history");
        sets.into_iter()
            .map(|set| query.apply(set).map_err(QueryError::from))
            .collect()
    }
}
