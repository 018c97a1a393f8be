//! Benchmark utilities for eurofx.
//!
//! Builds synthetic documents in the ECB time-series layout so parsing,
//! ingestion and re-basing can be measured without network access.

use chrono::{Datelike, NaiveDate, Weekday};
use eurofx_lib::{DatedRateSet, Quote};
use rust_decimal::Decimal;
use std::fmt::Write;

/// The 32 currencies of the ECB reference-rate basket.
pub const CURRENCIES: [&str; 32] = [
    "USD", "JPY", "BGN", "CZK", "DKK", "GBP", "HUF", "PLN", "RON", "SEK", "CHF", "ISK", "NOK",
    "HRK", "RUB", "TRY", "AUD", "BRL", "CAD", "CNY", "HKD", "IDR", "ILS", "INR", "KRW", "MXN",
    "MYR", "NZD", "PHP", "SGD", "THB", "ZAR",
];

/// Returns the first `days` weekdays starting at 1999-01-04, newest first.
#[must_use]
pub fn publication_dates(days: usize) -> Vec<String> {
    let mut dates = Vec::with_capacity(days);
    let mut date = NaiveDate::from_ymd_opt(1999, 1, 4).unwrap_or_default();
    while dates.len() < days {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            dates.push(date.format("%Y-%m-%d").to_string());
        }
        date = date.succ_opt().unwrap_or(date);
    }
    dates.reverse();
    dates
}

fn rate(day: usize, currency: usize) -> Decimal {
    // Deterministic values with four decimal places, always positive.
    let raw = 10_000 + (currency as i64 * 7_919 + day as i64 * 31) % 1_500_000;
    Decimal::new(raw, 4)
}

/// Builds an ECB-style document with `days` date groups of 32 rates each.
#[must_use]
pub fn synthetic_feed(days: usize) -> String {
    let mut xml = String::with_capacity(days * 1_400 + 256);
    xml.push_str(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <gesmes:Envelope xmlns:gesmes=\"http://www.gesmes.org/xml/2002-08-01\" \
         xmlns=\"http://www.ecb.int/vocabulary/2002-08-01/eurofxref\">\n\
         <gesmes:subject>Reference rates</gesmes:subject>\n<Cube>\n",
    );

    for (day, date) in publication_dates(days).iter().enumerate() {
        let _ = writeln!(xml, "<Cube time=\"{date}\">");
        for (i, currency) in CURRENCIES.iter().enumerate() {
            let _ = writeln!(
                xml,
                "<Cube currency=\"{currency}\" rate=\"{}\"/>",
                rate(day, i)
            );
        }
        xml.push_str("</Cube>\n");
    }

    xml.push_str("</Cube>\n</gesmes:Envelope>\n");
    xml
}

/// Builds one rate set with all basket currencies plus EUR.
#[must_use]
pub fn synthetic_set(date: &str) -> DatedRateSet {
    let quotes = CURRENCIES
        .iter()
        .enumerate()
        .map(|(i, currency)| Quote::new(*currency, rate(0, i)))
        .collect();
    DatedRateSet::with_quotes(date, quotes).with_base_quote()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eurofx_lib::parse_feed;

    #[test]
    fn test_synthetic_feed_parses() {
        let xml = synthetic_feed(10);
        let entries: Vec<_> = parse_feed(xml.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(entries.len(), 10);
        assert!(entries.iter().all(|e| e.quotes.len() == 32));
        assert_eq!(entries.last().unwrap().date, "1999-01-04");
    }

    #[test]
    fn test_publication_dates_skip_weekends() {
        let dates = publication_dates(6);
        assert_eq!(dates.first().unwrap(), "1999-01-11");
        assert!(!dates.contains(&"1999-01-09".to_string()));
    }
}
