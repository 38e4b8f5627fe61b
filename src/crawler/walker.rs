//! Depth-first worklist traversal
//!
//! The traversal replaces native recursion with an explicit stack of page
//! frames: descending into a newly seen page pushes a frame, exhausting a
//! page's targets pops it. Discovery order and count semantics match the
//! recursive formulation, but stack depth is bounded by heap memory instead
//! of the call stack.

use crate::cache::PageSource;
use crate::crawler::links::extract_page_links;
use crate::graph::UrlGraph;
use crate::url::ScopeFilter;
use crate::Result;
use std::collections::{HashSet, VecDeque};
use url::Url;

/// One fetched page's remaining link targets, in document order
struct Frame {
    targets: VecDeque<Url>,
}

impl Frame {
    fn new(targets: Vec<Url>) -> Self {
        Self {
            targets: targets.into(),
        }
    }
}

/// Discovers all pages reachable from the base URL via same-site hyperlinks
///
/// For each discovered page, counts how many hyperlink occurrences across all
/// visited pages referenced it.
///
/// # Traversal
///
/// - A target's count is incremented on every occurrence.
/// - The first occurrence of a target also fetches it and descends into its
///   links immediately, before the current page's remaining anchors
///   (depth-first order).
/// - Already-seen targets are never re-visited, which guarantees termination
///   on cyclic link structures.
/// - The base URL is pre-seeded into the seen-set: it is visited exactly once
///   as the traversal root, and enters the graph with count 1 only when
///   another page first links back to it.
///
/// # Arguments
///
/// * `source` - The page source to fetch HTML through
/// * `base_url` - The traversal root; also defines the site scope
///
/// # Returns
///
/// * `Ok(UrlGraph)` - Discovered URL to inbound-count mapping
/// * `Err(ScrapeError)` - A page fetch failed; the whole crawl aborts
pub async fn crawl<S: PageSource>(source: &S, base_url: &Url) -> Result<UrlGraph> {
    let scope = ScopeFilter::new(base_url);
    let mut graph = UrlGraph::new();
    let mut seen: HashSet<String> = HashSet::new();

    seen.insert(base_url.to_string());

    tracing::info!("crawl starting at {}", base_url);
    let html = source.fetch_html(base_url.as_str()).await?;
    let mut stack = vec![Frame::new(extract_page_links(&html, base_url, &scope))];

    loop {
        let target = match stack.last_mut() {
            None => break,
            Some(frame) => frame.targets.pop_front(),
        };

        match target {
            None => {
                stack.pop();
            }
            Some(target) => {
                let key = target.to_string();
                *graph.entry(key.clone()).or_insert(0) += 1;

                if seen.insert(key) {
                    let html = source.fetch_html(target.as_str()).await?;
                    let targets = extract_page_links(&html, &target, &scope);
                    tracing::debug!("visited {} ({} in-scope links)", target, targets.len());
                    stack.push(Frame::new(targets));
                }
            }
        }
    }

    tracing::info!("crawl finished, {} linked pages discovered", graph.len());
    Ok(graph)
}
