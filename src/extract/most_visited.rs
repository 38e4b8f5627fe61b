//! Most-visited lookup

use crate::graph::UrlGraph;
use crate::{Result, ScrapeError};

/// Finds the page with the most links to it
///
/// A single linear scan over the URL graph. The first entry (in graph
/// iteration order) with a strictly greater count wins, so ties resolve to
/// the earliest key.
///
/// # Arguments
///
/// * `graph` - The URL to inbound-count mapping
///
/// # Returns
///
/// * `Ok((count, url))` - The maximum inbound count and one URL achieving it
/// * `Err(ScrapeError::EmptyGraph)` - The graph has no entries
pub fn get_most_visited_webpage(graph: &UrlGraph) -> Result<(u64, String)> {
    let mut best: Option<(u64, &String)> = None;

    for (url, count) in graph {
        match best {
            Some((max, _)) if *count <= max => {}
            _ => best = Some((*count, url)),
        }
    }

    best.map(|(count, url)| (count, url.clone()))
        .ok_or(ScrapeError::EmptyGraph)
}
