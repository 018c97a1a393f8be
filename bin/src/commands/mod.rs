//! CLI command implementations.

pub(crate) mod query;
pub(crate) mod reset;
pub(crate) mod scrape;
