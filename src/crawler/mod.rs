//! Crawler module for same-site link discovery
//!
//! This module contains the core crawling logic:
//! - Anchor extraction and resolution against the referring page
//! - Depth-first worklist traversal with a seen-set
//! - Inbound-link counting across all visited pages

mod links;
mod walker;

pub use links::extract_page_links;
pub use walker::crawl;
