//! Display utilities and output formatting for the eurofx CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use eurofx_lib::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Output format for query results.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Table,
    Csv,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => Self::Table,
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v` / `--quiet`.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Opens the rate database at `path`, or at the default location.
pub(crate) fn open_store(path: Option<PathBuf>) -> Result<SqliteStore> {
    let path = path.unwrap_or_else(SqliteStore::default_path);
    SqliteStore::open(&path)
        .with_context(|| format!("Failed to open rate database {}", path.display()))
}

/// Writes rate sets to `output`, or to stdout when no path is given.
pub(crate) fn write_sets(sets: &[DatedRateSet], format: Format, output: Option<&Path>) -> Result<()> {
    let format = OutputFormat::from(format);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            format.write_sets(sets, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let mut writer = BufWriter::new(std::io::stdout());
            format.write_sets(sets, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// Creates a spinner for work of unknown length.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
