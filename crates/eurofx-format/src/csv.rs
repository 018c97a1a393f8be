//! CSV output format.

use eurofx_types::DatedRateSet;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter writing a `date,symbol,value` header and one row per quote.
///
/// Symbols are ISO codes and values are plain decimals, so no field needs
/// quoting.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Creates a new CSV formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for CsvFormatter {
    fn write_sets<W: Write + Send>(
        &self,
        sets: &[DatedRateSet],
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(writer, "date,symbol,value")?;

        for set in sets {
            for quote in &set.quotes {
                writeln!(writer, "{},{},{}", set.date, quote.symbol, quote.value)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eurofx_types::Quote;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn sample() -> DatedRateSet {
        DatedRateSet::with_quotes(
            "2019-01-04",
            vec![Quote::new("USD", dec!(1.1403)), Quote::new("JPY", dec!(123.4100))],
        )
        .with_base_quote()
    }

    #[test]
    fn test_csv_rows() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter.write_set(&sample(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(
            lines,
            [
                "date,symbol,value",
                "2019-01-04,USD,1.1403",
                "2019-01-04,JPY,123.4100",
                "2019-01-04,EUR,1"
            ]
        );
    }

    #[test]
    fn test_csv_no_sets_is_header_only() {
        let mut output = Cursor::new(Vec::new());

        CsvFormatter::new().write_sets(&[], &mut output).unwrap();

        assert_eq!(String::from_utf8(output.into_inner()).unwrap(), "date,symbol,value\n");
    }
}
