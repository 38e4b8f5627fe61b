//! Scrape orchestration

use crate::cache::PageSource;
use crate::crawler::crawl;
use crate::extract::{
    get_changes, get_most_params, get_most_visited_webpage, linux_only_availability,
};
use crate::graph::{load_graph, save_graph, UrlGraph};
use crate::report::FullScrap;
use crate::Result;
use std::path::Path;
use url::Url;

/// Loads the persisted URL graph, or builds it by crawling
///
/// When the graph file exists (and `fresh` is false) it is reloaded verbatim
/// and no crawling happens. Otherwise the site is crawled and the resulting
/// graph is persisted before it is returned, so the next run skips the crawl.
///
/// # Arguments
///
/// * `source` - The page source to fetch HTML through
/// * `base_url` - The crawl root and site scope
/// * `graph_path` - Location of the persisted graph document
/// * `fresh` - Re-crawl even if a persisted graph exists
pub async fn load_or_build_graph<S: PageSource>(
    source: &S,
    base_url: &Url,
    graph_path: &Path,
    fresh: bool,
) -> Result<UrlGraph> {
    if !fresh && graph_path.exists() {
        tracing::info!("loading URL graph from {}", graph_path.display());
        return load_graph(graph_path);
    }

    let graph = crawl(source, base_url).await?;
    save_graph(graph_path, &graph)?;
    tracing::info!("URL graph persisted to {}", graph_path.display());

    Ok(graph)
}

/// Runs a full scrape: page discovery followed by all four extractors
///
/// Each extractor independently re-fetches pages through the page source;
/// after the crawl those fetches are cache hits. Any extractor error aborts
/// the run with no partial output.
///
/// # Arguments
///
/// * `source` - The page source to fetch HTML through
/// * `base_url` - The crawl root and site scope
/// * `graph_path` - Location of the persisted graph document
/// * `fresh` - Re-crawl even if a persisted graph exists
///
/// # Returns
///
/// * `Ok(FullScrap)` - The bundled extraction results
/// * `Err(ScrapeError)` - Any fetch, parse, or persistence failure
pub async fn scrape_all<S: PageSource>(
    source: &S,
    base_url: &Url,
    graph_path: &Path,
    fresh: bool,
) -> Result<FullScrap> {
    let graph = load_or_build_graph(source, base_url, graph_path, fresh).await?;

    tracing::info!("scanning {} pages for availability notes", graph.len());
    let linux = linux_only_availability(source, &graph).await?;

    let most_visited = get_most_visited_webpage(&graph)?;

    tracing::info!("tallying version annotations");
    let changes = get_changes(source, &graph).await?;

    tracing::info!("scanning parameter counts");
    let params = get_most_params(source, &graph).await?;

    Ok(FullScrap {
        linux_only_availability: linux,
        most_visited_webpage: most_visited,
        changes,
        params,
    })
}
