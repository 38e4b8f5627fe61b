//! URL handling module for docscrape
//!
//! This module provides hyperlink resolution (fragment stripping plus
//! resolution against the referring page) and the site-scope filter that
//! decides whether a resolved link belongs to the crawled site.

mod resolve;
mod scope;

// Re-export main items
pub use resolve::resolve_href;
pub use scope::ScopeFilter;
