//! Output format abstraction.

use eurofx_types::DatedRateSet;
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Aligned text table.
    #[default]
    Table,
    /// CSV format.
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON, one record per quote.
    Ndjson,
}

impl OutputFormat {
    /// Returns the format name as accepted by [`str::parse`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }

    /// Writes `sets` to `writer` in this format with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_sets<W: Write + Send>(
        &self,
        sets: &[DatedRateSet],
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Table => crate::TableFormatter::new().write_sets(sets, writer),
            Self::Csv => crate::CsvFormatter::new().write_sets(sets, writer),
            Self::Json => crate::JsonFormatter::new()
                .with_pretty(true)
                .write_sets(sets, writer),
            Self::Ndjson => crate::NdjsonFormatter::new().write_sets(sets, writer),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes a sequence of rate sets to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_sets<W: Write + Send>(
        &self,
        sets: &[DatedRateSet],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes a single rate set to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_set<W: Write + Send>(&self, set: &DatedRateSet, writer: W) -> Result<(), FormatError> {
        self.write_sets(std::slice::from_ref(set), writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Ndjson);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(FormatError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let formats = [
            OutputFormat::Table,
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Ndjson,
        ];
        for format in formats {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_dispatch_writes_requested_format() {
        use eurofx_types::Quote;
        use rust_decimal_macros::dec;

        let sets = [DatedRateSet::with_quotes("2019-01-04", vec![Quote::new("USD", dec!(1.1403))])];
        let render = |format: OutputFormat| {
            let mut output: Vec<u8> = Vec::new();
            format.write_sets(&sets, &mut output).unwrap();
            String::from_utf8(output).unwrap()
        };

        assert!(render(OutputFormat::Csv).ends_with("2019-01-04,USD,1.1403\n"));
        assert_eq!(
            render(OutputFormat::Ndjson),
            "{\"date\":\"2019-01-04\",\"symbol\":\"USD\",\"value\":\"1.1403\"}\n"
        );
        assert!(render(OutputFormat::Json).starts_with("[\n"));
        assert!(render(OutputFormat::Table).starts_with("2019-01-04\n"));
    }
}
