//! Ingestion run summary.

use eurofx_feed::FeedKind;

/// A date that was parsed but could not be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistFailure {
    /// Date of the set that failed.
    pub date: String,
    /// Rendered storage error.
    pub error: String,
}

/// Outcome of one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// Feed variant that was ingested.
    pub feed: FeedKind,
    /// Number of date groups in the document.
    pub parsed: usize,
    /// Dates stored by this run.
    pub created: usize,
    /// Dates that were already stored.
    pub existing: usize,
    /// Dates that failed to store.
    pub failures: Vec<PersistFailure>,
}

impl IngestReport {
    pub(crate) const fn new(feed: FeedKind, parsed: usize) -> Self {
        Self {
            feed,
            parsed,
            created: 0,
            existing: 0,
            failures: Vec::new(),
        }
    }

    /// Returns true if every parsed date was stored or already present.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl std::fmt::Display for IngestReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} feed: {} dates parsed, {} created, {} already present, {} failed",
            self.feed,
            self.parsed,
            self.created,
            self.existing,
            self.failures.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let mut report = IngestReport::new(FeedKind::Recent, 3);
        report.created = 2;
        report.existing = 1;

        assert!(report.is_clean());
        assert_eq!(
            report.to_string(),
            "recent feed: 3 dates parsed, 2 created, 1 already present, 0 failed"
        );
    }

    #[test]
    fn test_report_with_failures_is_not_clean() {
        let mut report = IngestReport::new(FeedKind::History, 1);
        report.failures.push(PersistFailure {
            date: "2019-01-04".to_string(),
            error: "disk full".to_string(),
        });
        assert!(!report.is_clean());
    }
}
