//! Human-readable table output.

use eurofx_types::DatedRateSet;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Aligned text output, one block per date.
///
/// ```text
/// 2019-01-04
///   USD    1.1403
///   JPY  123.4100
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TableFormatter;

impl TableFormatter {
    /// Creates a new table formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for TableFormatter {
    fn write_sets<W: Write + Send>(
        &self,
        sets: &[DatedRateSet],
        mut writer: W,
    ) -> Result<(), FormatError> {
        if sets.is_empty() {
            writeln!(writer, "No rates found")?;
            return Ok(());
        }

        for (i, set) in sets.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }

            let date = if set.date.is_empty() { "-" } else { set.date.as_str() };
            if set.is_empty() {
                writeln!(writer, "{date}  (no rates)")?;
                continue;
            }
            writeln!(writer, "{date}")?;

            let rendered: Vec<(&str, String)> = set
                .quotes
                .iter()
                .map(|q| (q.symbol.as_str(), q.value.to_string()))
                .collect();
            let symbol_width = rendered.iter().map(|(s, _)| s.len()).max().unwrap_or(0);
            let value_width = rendered.iter().map(|(_, v)| v.len()).max().unwrap_or(0);

            for (symbol, value) in &rendered {
                writeln!(writer, "  {symbol:<symbol_width$}  {value:>value_width$}")?;
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

    fn render(sets: &[DatedRateSet]) -> String {
        let mut output = Cursor::new(Vec::new());
        TableFormatter::new().write_sets(sets, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_values_are_right_aligned() {
        let set = DatedRateSet::with_quotes(
            "2019-01-04",
            vec![Quote::new("USD", dec!(1.1403)), Quote::new("JPY", dec!(123.4100))],
        );

        assert_eq!(render(&[set]), "2019-01-04\n  USD    1.1403\n  JPY  123.4100\n");
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(
            render(&[DatedRateSet::new("2000-01-01")]),
            "2000-01-01  (no rates)\n"
        );
        assert_eq!(render(&[]), "No rates found\n");
    }
}
