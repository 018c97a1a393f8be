//! Re-basing of quotes onto another currency.

use eurofx_types::{BASE_CURRENCY, Quote};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while deriving rates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DerivationError {
    /// The requested base currency has no quote in the set.
    #[error("base {0} not supported")]
    UnsupportedBase(String),

    /// The base currency's stored value is zero.
    #[error("base {0} has a zero rate")]
    ZeroBaseRate(String),

    /// A quotient did not fit in a decimal.
    #[error("rate for {symbol} overflows when re-based")]
    Overflow {
        /// Currency whose value overflowed.
        symbol: String,
    },
}

/// Returns the value of `base` within `quotes`.
///
/// # Errors
///
/// Returns [`DerivationError::UnsupportedBase`] if no quote has that symbol.
pub fn base_rate(quotes: &[Quote], base: &str) -> Result<Decimal, DerivationError> {
    quotes
        .iter()
        .find(|q| q.symbol == base)
        .map(|q| q.value)
        .ok_or_else(|| DerivationError::UnsupportedBase(base.to_string()))
}

/// Re-expresses `quotes` relative to `base`.
///
/// With no base, or a base of `EUR`, the quotes are returned unchanged. Any
/// other base is handled by [`rebase_on`].
///
/// # Errors
///
/// Returns an error if the base is not quoted in the set or a value cannot
/// be divided by it.
///
/// # Example
///
/// ```
/// use eurofx_query::rebase;
/// use eurofx_types::Quote;
/// use rust_decimal::Decimal;
///
/// let quotes = vec![
///     Quote::new("USD", Decimal::new(113, 2)),
///     Quote::base(),
/// ];
/// let rebased = rebase(&quotes, Some("USD")).unwrap();
/// assert_eq!(rebased[0].value, Decimal::ONE);
/// ```
pub fn rebase(quotes: &[Quote], base: Option<&str>) -> Result<Vec<Quote>, DerivationError> {
    match base {
        Some(base) if base != BASE_CURRENCY => rebase_on(quotes, base),
        _ => Ok(quotes.to_vec()),
    }
}

/// Divides every value in `quotes` by the value of `base`.
///
/// Unlike [`rebase`] this always divides, including for `EUR`, so a set
/// re-based onto another currency can be brought back onto the euro.
///
/// # Errors
///
/// Returns an error if the base is not quoted, its value is zero, or a
/// quotient overflows.
pub fn rebase_on(quotes: &[Quote], base: &str) -> Result<Vec<Quote>, DerivationError> {
    let divisor = base_rate(quotes, base)?;
    if divisor.is_zero() {
        return Err(DerivationError::ZeroBaseRate(base.to_string()));
    }

    quotes
        .iter()
        .map(|q| {
            q.value
                .checked_div(divisor)
                .map(|value| Quote::new(q.symbol.clone(), value))
                .ok_or_else(|| DerivationError::Overflow {
                    symbol: q.symbol.clone(),
                })
        })
        .collect()
}
