//! Scrape command implementation.
//!
//! Runs one ingestion of the ECB feed into the local database.

use crate::display::{open_store, spinner};
use anyhow::{Context, Result};
use eurofx_lib::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

/// Fetch the feed and store every date not yet present.
pub(crate) async fn scrape(
    database: Option<PathBuf>,
    history_url: Option<String>,
    recent_url: Option<String>,
    timeout_secs: u64,
    quiet: bool,
) -> Result<()> {
    let store = open_store(database)?;

    let mut urls = FeedUrls::default();
    if let Some(url) = history_url {
        urls.history = url;
    }
    if let Some(url) = recent_url {
        urls.recent = url;
    }

    let config = ClientConfig {
        timeout: Duration::from_secs(timeout_secs),
        ..Default::default()
    };
    let client = FeedClient::new(config).context("Failed to create HTTP client")?;

    let ingestor = Ingestor::new(client, &store).with_urls(urls);

    let progress = spinner(quiet, "Fetching ECB reference rates".to_string());
    let result = ingestor.run().await;
    progress.finish_and_clear();

    let report = result.context("Ingestion failed")?;
    if !quiet {
        println!("{report}");
        for failure in &report.failures {
            eprintln!("  {}: {}", failure.date, failure.error);
        }
    }

    Ok(())
}
