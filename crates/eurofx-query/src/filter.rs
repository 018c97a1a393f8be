//! Symbol filtering.

use eurofx_types::Quote;

/// Keeps only the quotes whose symbol was requested, in request order.
///
/// An absent or empty request returns every quote in its original order.
/// Unknown symbols produce no entry, and each requested symbol is looked up
/// independently, so a symbol requested twice appears twice.
#[must_use]
pub fn filter_symbols(quotes: Vec<Quote>, symbols: Option<&[String]>) -> Vec<Quote> {
    match symbols {
        Some(symbols) if !symbols.is_empty() => symbols
            .iter()
            .filter_map(|symbol| quotes.iter().find(|q| &q.symbol == symbol).cloned())
            .collect(),
        _ => quotes,
    }
}
