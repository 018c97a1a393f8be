//! JSON output formats.

use eurofx_types::DatedRateSet;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON array of rate sets, each with its date and quotes.
///
/// Rate values are serialized as strings so no precision is lost.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_sets<W: Write + Send>(
        &self,
        sets: &[DatedRateSet],
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, sets)?;
        } else {
            serde_json::to_writer(&mut writer, sets)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

/// One quote flattened with its publication date.
#[derive(Serialize)]
struct QuoteRecord<'a> {
    date: &'a str,
    symbol: &'a str,
    value: &'a Decimal,
}

/// Newline-delimited JSON, one `{date, symbol, value}` record per quote.
///
/// Records follow set order and then quote order, so consumers can stream
/// them without holding a whole date in memory. A set with no quotes writes
/// nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NdjsonFormatter;

impl NdjsonFormatter {
    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for NdjsonFormatter {
    fn write_sets<W: Write + Send>(
        &self,
        sets: &[DatedRateSet],
        mut writer: W,
    ) -> Result<(), FormatError> {
        for set in sets {
            for quote in &set.quotes {
                let record = QuoteRecord {
                    date: &set.date,
                    symbol: &quote.symbol,
                    value: &quote.value,
                };
                serde_json::to_writer(&mut writer, &record)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}
