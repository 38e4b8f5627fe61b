//! URL graph module
//!
//! The URL graph is the crawler's output: a mapping from every discovered URL
//! to the number of hyperlink occurrences that referenced it. It is built once
//! per crawl, persisted as a single flat JSON object, and reloaded verbatim on
//! subsequent runs so they skip crawling entirely.

mod store;

pub use store::{load_graph, save_graph};

use std::collections::BTreeMap;

/// Mapping from discovered URL to inbound-reference count
///
/// Every key contains the crawl's base-URL scope; every count is >= 1.
/// A `BTreeMap` keeps iteration and serialization order deterministic
/// (keys sorted lexicographically).
pub type UrlGraph = BTreeMap<String, u64>;
