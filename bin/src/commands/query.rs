//! Query commands: latest, date and history.

use crate::display::{Format, open_store, write_sets};
use anyhow::{Context, Result};
use eurofx_lib::prelude::*;
use eurofx_lib::{DateRange, parse_date_key};
use std::path::{Path, PathBuf};
use tracing::info;

/// Print the most recently stored rates.
pub(crate) fn latest(
    database: Option<PathBuf>,
    query: &RateQuery,
    format: Format,
    output: Option<&Path>,
) -> Result<()> {
    let service = RateService::new(open_store(database)?);
    let set = service.latest(query)?;
    write_sets(std::slice::from_ref(&set), format, output)
}

/// Print the rates published on one date.
pub(crate) fn on_date(
    database: Option<PathBuf>,
    date: &str,
    query: &RateQuery,
    format: Format,
    output: Option<&Path>,
) -> Result<()> {
    parse_date_key(date).with_context(|| format!("Invalid date: {date}"))?;

    let service = RateService::new(open_store(database)?);
    let set = service.on_date(date, query)?;
    write_sets(std::slice::from_ref(&set), format, output)
}

/// Print the rates for every stored date in an inclusive range.
pub(crate) fn history(
    database: Option<PathBuf>,
    start: &str,
    end: &str,
    query: &RateQuery,
    format: Format,
    output: Option<&Path>,
) -> Result<()> {
    let range = DateRange::parse(start, end)
        .with_context(|| format!("Invalid date range: {start} to {end}"))?;

    let service = RateService::new(open_store(database)?);
    let sets = service.in_range(&range.start_key(), &range.end_key(), query)?;
    info!(
        range = %range,
        days = range.total_days(),
        stored = sets.len(),
        "history query"
    );
    write_sets(&sets, format, output)
}
