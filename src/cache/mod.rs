//! Page cache module
//!
//! This module provides the fetch-or-load contract for page HTML: a cache hit
//! is served straight from disk, a miss is downloaded over HTTP (after a fixed
//! throttle delay), persisted, and returned. The `PageSource` trait is the
//! single seam between I/O and the pure extraction logic, so the crawler and
//! the extractors can be tested against injected fixtures.

mod http;

pub use http::{build_http_client, HttpPageCache};

use crate::Result;

/// Source of page HTML keyed by URL
///
/// Implementations decide where the HTML comes from (disk cache, network,
/// in-memory fixture). Callers treat the returned string as the page content
/// for that URL, with no freshness guarantee.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Returns the HTML content of the given URL
    async fn fetch_html(&self, url: &str) -> Result<String>;
}

/// Derives the cache file name for a URL
///
/// The name is the URL with every `:` and `/` character stripped, plus an
/// `.html` extension. The derivation is deterministic, so each distinct URL
/// maps to at most one cache file.
///
/// # Examples
///
/// ```
/// use docscrape::cache::cache_file_name;
///
/// assert_eq!(
///     cache_file_name("https://docs.example.com/library/os.html"),
///     "httpsdocs.example.comlibraryos.html.html"
/// );
/// ```
pub fn cache_file_name(url: &str) -> String {
    let stripped: String = url.chars().filter(|c| *c != ':' && *c != '/').collect();
    format!("{}.html", stripped)
}
