//! Time-series XML parsing.
//!
//! The ECB documents nest three levels of `Cube` elements inside a
//! `gesmes:Envelope`:
//!
//! ```xml
//! <Cube>
//!   <Cube time="2019-01-10">
//!     <Cube currency="USD" rate="1.1569"/>
//!     <Cube currency="JPY" rate="125.30"/>
//!   </Cube>
//! </Cube>
//! ```

use eurofx_types::{DatedRateSet, Quote, parse_date_key};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

const CUBE: &[u8] = b"Cube";

const WRAPPER_LEVEL: usize = 1;
const DATE_LEVEL: usize = 2;
const RATE_LEVEL: usize = 3;

/// Errors for documents that do not have the expected feed structure.
///
/// Any of these aborts the whole parse: a document that fails once is not
/// trusted for any of its dates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The document is not well-formed XML.
    #[error("Malformed XML: {0}")]
    Xml(String),

    /// A date group has no `time` attribute.
    #[error("Date not found on rate group")]
    MissingDate,

    /// A date group's `time` attribute is not a `YYYY-MM-DD` date.
    #[error("Invalid date '{0}' on rate group")]
    InvalidDate(String),

    /// A date group contains no rates.
    #[error("Rates not found under date {date}")]
    EmptyDateEntry {
        /// The date of the empty group.
        date: String,
    },

    /// A rate entry has no `rate` attribute.
    #[error("Value not found under rate for {date}")]
    MissingRate {
        /// The date of the enclosing group.
        date: String,
    },

    /// A rate entry's value is not a decimal number.
    #[error("Invalid rate value '{value}' under date {date}")]
    InvalidRate {
        /// The date of the enclosing group.
        date: String,
        /// The raw attribute value.
        value: String,
    },

    /// A rate entry has no `currency` attribute.
    #[error("Symbol not found under rate for {date}")]
    MissingCurrency {
        /// The date of the enclosing group.
        date: String,
    },

    /// A currency appears twice in the same date group.
    #[error("Currency {currency} listed twice under date {date}")]
    DuplicateCurrency {
        /// The date of the enclosing group.
        date: String,
        /// The repeated currency code.
        currency: String,
    },

    /// The document ended inside a date group.
    #[error("Document ended inside date group {date}")]
    Truncated {
        /// The date of the unterminated group.
        date: String,
    },
}

/// One date group from the feed, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Publication date (`YYYY-MM-DD`).
    pub date: String,
    /// Quotes as published, without the implicit EUR quote.
    pub quotes: Vec<Quote>,
}

impl FeedEntry {
    fn new(date: String) -> Self {
        Self {
            date,
            quotes: Vec::new(),
        }
    }

    fn push_rate(&mut self, attrs: CubeAttrs) -> Result<(), FeedError> {
        let raw = attrs.rate.ok_or_else(|| FeedError::MissingRate {
            date: self.date.clone(),
        })?;
        let value = parse_rate(&raw).ok_or_else(|| FeedError::InvalidRate {
            date: self.date.clone(),
            value: raw.clone(),
        })?;
        let symbol = attrs.currency.ok_or_else(|| FeedError::MissingCurrency {
            date: self.date.clone(),
        })?;

        if self.quotes.iter().any(|q| q.symbol == symbol) {
            return Err(FeedError::DuplicateCurrency {
                date: self.date.clone(),
                currency: symbol,
            });
        }

        self.quotes.push(Quote::new(symbol, value));
        Ok(())
    }

    /// Converts the entry into a rate set with the same quotes.
    #[must_use]
    pub fn into_rate_set(self) -> DatedRateSet {
        DatedRateSet::with_quotes(self.date, self.quotes)
    }
}

impl From<FeedEntry> for DatedRateSet {
    fn from(entry: FeedEntry) -> Self {
        entry.into_rate_set()
    }
}

/// Parses a published rate: an optional `-`, ASCII digits, and at most one
/// `.` with a digit on at least one side.
///
/// `Decimal::from_str` alone also accepts `_` separators and a leading `+`.
fn parse_rate(raw: &str) -> Option<Decimal> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int) || !all_digits(frac) || int.len() + frac.len() == 0 {
        return None;
    }

    Decimal::from_str(raw).ok()
}

/// Attributes of interest on a `Cube` element. Empty values count as absent.
#[derive(Debug, Default)]
struct CubeAttrs {
    time: Option<String>,
    currency: Option<String>,
    rate: Option<String>,
}

impl CubeAttrs {
    fn read(element: &BytesStart<'_>) -> Result<Self, FeedError> {
        let mut attrs = Self::default();

        for attr in element.attributes() {
            let attr = attr.map_err(|e| FeedError::Xml(e.to_string()))?;
            let value = attr
                .unescape_value()
                .map_err(|e| FeedError::Xml(e.to_string()))?
                .trim()
                .to_string();
            if value.is_empty() {
                continue;
            }

            match attr.key.local_name().as_ref() {
                b"time" => attrs.time = Some(value),
                b"currency" => attrs.currency = Some(value),
                b"rate" => attrs.rate = Some(value),
                _ => {}
            }
        }

        Ok(attrs)
    }
}

/// A `Cube` event reduced to what the parser needs.
#[derive(Debug)]
enum Tag {
    Open(CubeAttrs),
    Leaf(CubeAttrs),
    Close,
    Other,
    Eof,
}

/// Lazy parser over a feed document.
///
/// Yields one [`FeedEntry`] per date group as soon as the group closes. After
/// the first error the parser yields nothing further.
pub struct FeedParser<'a> {
    reader: Reader<&'a [u8]>,
    depth: usize,
    current: Option<FeedEntry>,
    finished: bool,
}

/// Parses a time-series feed document.
///
/// # Example
///
/// ```
/// use eurofx_feed::parse_feed;
///
/// let xml = br#"<Cube><Cube time="2019-01-10"><Cube currency="USD" rate="1.1569"/></Cube></Cube>"#;
/// let entries: Vec<_> = parse_feed(xml).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(entries[0].date, "2019-01-10");
/// assert_eq!(entries[0].quotes[0].symbol, "USD");
/// ```
#[must_use]
pub fn parse_feed(data: &[u8]) -> FeedParser<'_> {
    FeedParser {
        reader: Reader::from_reader(data),
        depth: 0,
        current: None,
        finished: false,
    }
}

impl std::fmt::Debug for FeedParser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedParser")
            .field("depth", &self.depth)
            .field("current", &self.current)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl FeedParser<'_> {
    fn read_tag(&mut self) -> Result<Tag, FeedError> {
        let event = self
            .reader
            .read_event()
            .map_err(|e| FeedError::Xml(e.to_string()))?;

        let tag = match event {
            Event::Start(e) if e.local_name().as_ref() == CUBE => Tag::Open(CubeAttrs::read(&e)?),
            Event::Empty(e) if e.local_name().as_ref() == CUBE => Tag::Leaf(CubeAttrs::read(&e)?),
            Event::End(e) if e.local_name().as_ref() == CUBE => Tag::Close,
            Event::Eof => Tag::Eof,
            _ => Tag::Other,
        };
        Ok(tag)
    }

    fn step(&mut self) -> Result<Option<FeedEntry>, FeedError> {
        match self.read_tag()? {
            Tag::Open(attrs) => {
                self.depth += 1;
                self.open_cube(attrs, self.depth, false)?;
                Ok(None)
            }
            Tag::Leaf(attrs) => {
                self.open_cube(attrs, self.depth + 1, true)?;
                Ok(None)
            }
            Tag::Close => self.close_cube(),
            Tag::Other => Ok(None),
            Tag::Eof => {
                self.finished = true;
                match self.current.take() {
                    Some(entry) => Err(FeedError::Truncated { date: entry.date }),
                    None => Ok(None),
                }
            }
        }
    }

    fn open_cube(
        &mut self,
        attrs: CubeAttrs,
        level: usize,
        self_closing: bool,
    ) -> Result<(), FeedError> {
        match level {
            WRAPPER_LEVEL => {}
            DATE_LEVEL => {
                let date = attrs.time.ok_or(FeedError::MissingDate)?;
                parse_date_key(&date).map_err(|_| FeedError::InvalidDate(date.clone()))?;
                if self_closing {
                    return Err(FeedError::EmptyDateEntry { date });
                }
                self.current = Some(FeedEntry::new(date));
            }
            RATE_LEVEL => {
                if let Some(entry) = self.current.as_mut() {
                    entry.push_rate(attrs)?;
                }
            }
            // Nothing deeper than a rate is defined.
            _ => {}
        }
        Ok(())
    }

    fn close_cube(&mut self) -> Result<Option<FeedEntry>, FeedError> {
        let level = self.depth;
        self.depth = self.depth.saturating_sub(1);

        if level != DATE_LEVEL {
            return Ok(None);
        }

        match self.current.take() {
            Some(entry) if entry.quotes.is_empty() => {
                Err(FeedError::EmptyDateEntry { date: entry.date })
            }
            entry => Ok(entry),
        }
    }
}

impl Iterator for FeedParser<'_> {
    type Item = Result<FeedEntry, FeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            match self.step() {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => {}
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl std::iter::FusedIterator for FeedParser<'_> {}
