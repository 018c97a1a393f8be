//! ECB feed locations.

/// Full history of euro reference rates since the first publication.
pub const HISTORY_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-hist.xml";

/// Trailing window (about 90 days) of euro reference rates.
pub const RECENT_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-hist-90d.xml";

/// Date of the first ECB reference-rate publication.
///
/// A stored set for this date means the full history has been ingested.
pub const HISTORY_START_DATE: &str = "1999-01-04";

/// Which upstream document to ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// The complete back-series.
    History,
    /// The short trailing window used for incremental updates.
    Recent,
}

impl FeedKind {
    /// Returns the feed kind as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Recent => "recent",
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Locations of the two feed variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUrls {
    /// Full-history document URL.
    pub history: String,
    /// Recent-window document URL.
    pub recent: String,
}

impl Default for FeedUrls {
    fn default() -> Self {
        Self {
            history: HISTORY_URL.to_string(),
            recent: RECENT_URL.to_string(),
        }
    }
}

impl FeedUrls {
    /// Returns the URL to fetch for the given feed kind.
    ///
    /// # Example
    ///
    /// ```
    /// use eurofx_feed::url::{FeedKind, FeedUrls};
    ///
    /// let urls = FeedUrls::default();
    /// assert!(urls.url_for(FeedKind::Recent).ends_with("eurofxref-hist-90d.xml"));
    /// ```
    #[must_use]
    pub fn url_for(&self, kind: FeedKind) -> &str {
        match kind {
            FeedKind::History => &self.history,
            FeedKind::Recent => &self.recent,
        }
    }
}
