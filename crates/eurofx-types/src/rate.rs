//! Exchange rate representation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Implicit base currency of the upstream feed.
///
/// Every published value is the amount of a currency worth one euro.
pub const BASE_CURRENCY: &str = "EUR";

/// One currency's exchange value within a [`DatedRateSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Currency code (e.g., "USD", "BRL").
    pub symbol: String,
    /// Units of this currency per unit of the set's base currency.
    pub value: Decimal,
}

impl Quote {
    /// Creates a new quote.
    #[must_use]
    pub fn new(symbol: impl Into<String>, value: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            value,
        }
    }

    /// Returns the synthetic base-currency quote (EUR = 1).
    #[must_use]
    pub fn base() -> Self {
        Self::new(BASE_CURRENCY, Decimal::ONE)
    }

    /// Returns true if this quote is for the feed's base currency.
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.symbol == BASE_CURRENCY
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbol, self.value)
    }
}

/// The full set of quotes published for one calendar date.
///
/// The date (`YYYY-MM-DD`) is the identity of a set: storage holds at most one
/// set per date, and sets are never modified once stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedRateSet {
    /// Publication date (`YYYY-MM-DD`).
    pub date: String,
    /// Quotes in publication order.
    pub quotes: Vec<Quote>,
}

impl DatedRateSet {
    /// Creates an empty set for the given date.
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            quotes: Vec::new(),
        }
    }

    /// Creates a set from a date and its quotes.
    #[must_use]
    pub fn with_quotes(date: impl Into<String>, quotes: Vec<Quote>) -> Self {
        Self {
            date: date.into(),
            quotes,
        }
    }

    /// Appends the synthetic EUR = 1 quote unless the set already has one.
    #[must_use]
    pub fn with_base_quote(mut self) -> Self {
        if !self.contains(BASE_CURRENCY) {
            self.quotes.push(Quote::base());
        }
        self
    }

    /// Looks up the quote for a currency.
    #[must_use]
    pub fn quote(&self, symbol: &str) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.symbol == symbol)
    }

    /// Returns true if the set has a quote for the currency.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.quote(symbol).is_some()
    }

    /// Returns the currency codes in publication order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.quotes.iter().map(|q| q.symbol.as_str())
    }

    /// Returns the number of quotes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if the set has no quotes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl std::fmt::Display for DatedRateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} quotes)", self.date, self.quotes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_set() -> DatedRateSet {
        DatedRateSet::with_quotes(
            "2019-01-01",
            vec![Quote::new("BRL", dec!(4.40)), Quote::new("USD", dec!(1.13))],
        )
    }

    #[test]
    fn test_with_base_quote() {
        let set = sample_set().with_base_quote();

        assert_eq!(set.len(), 3);
        assert_eq!(set.quotes.last(), Some(&Quote::base()));
        assert_eq!(set.quote("EUR").unwrap().value, Decimal::ONE);
    }

    #[test]
    fn test_with_base_quote_is_idempotent() {
        let set = sample_set().with_base_quote().with_base_quote();
        assert_eq!(set.symbols().filter(|s| *s == BASE_CURRENCY).count(), 1);
    }

    #[test]
    fn test_quote_lookup() {
        let set = sample_set();

        assert_eq!(set.quote("USD").unwrap().value, dec!(1.13));
        assert!(set.quote("ZAR").is_none());
        assert_eq!(set.symbols().collect::<Vec<_>>(), vec!["BRL", "USD"]);
    }

    #[test]
    fn test_value_serializes_as_exact_string() {
        let json = serde_json::to_string(&Quote::new("BRL", dec!(4.40))).unwrap();
        assert_eq!(json, r#"{"symbol":"BRL","value":"4.40"}"#);
    }

    #[test]
    fn test_default_set_is_empty() {
        let set = DatedRateSet::default();
        assert!(set.is_empty());
        assert!(set.date.is_empty());
    }
}
