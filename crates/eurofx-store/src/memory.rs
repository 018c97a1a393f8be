//! In-process rate store.

use crate::repository::{RateStore, Result, StoreError, Stored};
use eurofx_types::DatedRateSet;
use std::sync::RwLock;

/// Rate store held in memory, in insertion order.
///
/// Used by tests and by callers that do not need persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sets: RwLock<Vec<DatedRateSet>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&[DatedRateSet]) -> T) -> Result<T> {
        let sets = self.sets.read().map_err(|_| StoreError::Poisoned)?;
        Ok(f(sets.as_slice()))
    }
}

impl RateStore for MemoryStore {
    fn find_by_date(&self, date: &str) -> Result<Option<DatedRateSet>> {
        self.read(|sets| sets.iter().find(|s| s.date == date).cloned())
    }

    fn find_latest(&self) -> Result<Option<DatedRateSet>> {
        self.read(|sets| sets.last().cloned())
    }

    fn find_in_range(&self, start: &str, end: &str) -> Result<Vec<DatedRateSet>> {
        self.read(|sets| {
            let mut found: Vec<DatedRateSet> = sets
                .iter()
                .filter(|s| s.date.as_str() >= start && s.date.as_str() <= end)
                .cloned()
                .collect();
            found.sort_by(|a, b| a.date.cmp(&b.date));
            found
        })
    }

    fn find_or_create(&self, set: DatedRateSet) -> Result<Stored> {
        let mut sets = self.sets.write().map_err(|_| StoreError::Poisoned)?;
        if let Some(existing) = sets.iter().find(|s| s.date == set.date) {
            return Ok(Stored::existing(existing.clone()));
        }
        sets.push(set.clone());
        Ok(Stored::created(set))
    }

    fn exists_with_date(&self, date: &str) -> Result<bool> {
        self.read(|sets| sets.iter().any(|s| s.date == date))
    }

    fn count(&self) -> Result<usize> {
        self.read(<[DatedRateSet]>::len)
    }

    fn clear(&self) -> Result<()> {
        self.sets.write().map_err(|_| StoreError::Poisoned)?.clear();
        Ok(())
    }
}
