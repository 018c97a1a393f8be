//! Ingestion run coordination.

use crate::error::IngestError;
use crate::report::{IngestReport, PersistFailure};
use eurofx_feed::{FeedFetcher, FeedKind, FeedUrls, HISTORY_START_DATE, parse_feed};
use eurofx_store::RateStore;
use eurofx_types::DatedRateSet;
use tracing::{debug, info, warn};

/// Fetches an ECB feed and stores every date not already present.
///
/// Runs are sequential: one fetch, one complete parse, then one
/// find-or-create per date.
#[derive(Debug)]
pub struct Ingestor<F, S> {
    fetcher: F,
    store: S,
    urls: FeedUrls,
}

impl<F: FeedFetcher, S: RateStore> Ingestor<F, S> {
    /// Creates an ingestor using the default ECB feed locations.
    pub fn new(fetcher: F, store: S) -> Self {
        Self {
            fetcher,
            store,
            urls: FeedUrls::default(),
        }
    }

    /// Overrides the feed locations.
    #[must_use]
    pub fn with_urls(mut self, urls: FeedUrls) -> Self {
        self.urls = urls;
        self
    }

    /// Returns the feed locations.
    pub const fn urls(&self) -> &FeedUrls {
        &self.urls
    }

    /// Returns the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Chooses which feed to ingest.
    ///
    /// Until the first publication date is stored the full history is
    /// needed; afterwards the recent window is enough.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    pub fn select_feed(&self) -> Result<FeedKind, IngestError> {
        let kind = if self.store.exists_with_date(HISTORY_START_DATE)? {
            FeedKind::Recent
        } else {
            FeedKind::History
        };
        info!(feed = %kind, "selected feed");
        Ok(kind)
    }

    /// Runs one ingestion: select, fetch, parse and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if feed selection, the download, or parsing fails.
    /// Failures to store individual dates are reported, not returned.
    pub async fn run(&self) -> Result<IngestReport, IngestError> {
        let kind = self.select_feed()?;
        let url = self.urls.url_for(kind);

        info!(feed = %kind, url, "fetching feed");
        let document = self.fetcher.fetch(url).await?;

        self.ingest_document(kind, &document)
    }

    /// Parses `document` and stores each date group.
    ///
    /// The whole document is parsed before anything is written, so a
    /// malformed document leaves the store untouched. Every stored set gets
    /// the implicit `EUR = 1` quote appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn ingest_document(
        &self,
        kind: FeedKind,
        document: &[u8],
    ) -> Result<IngestReport, IngestError> {
        let sets: Vec<DatedRateSet> = parse_feed(document)
            .map(|entry| entry.map(|e| e.into_rate_set().with_base_quote()))
            .collect::<Result<_, _>>()?;

        let mut report = IngestReport::new(kind, sets.len());
        for set in sets {
            let date = set.date.clone();
            match self.store.find_or_create(set) {
                Ok(stored) if stored.created => {
                    info!(date, quotes = stored.set.len(), "rate set created");
                    report.created += 1;
                }
                Ok(_) => {
                    debug!(date, "rate set already present");
                    report.existing += 1;
                }
                Err(e) => {
                    warn!(date, error = %e, "failed to store rate set");
                    report.failures.push(PersistFailure {
                        date,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            feed = %kind,
            parsed = report.parsed,
            created = report.created,
            existing = report.existing,
            failed = report.failures.len(),
            "ingestion finished"
        );
        Ok(report)
    }
}
