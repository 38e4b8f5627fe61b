//! JSON persistence for the URL graph

use crate::graph::UrlGraph;
use crate::Result;
use std::path::Path;

/// Loads a persisted URL graph from a JSON file
///
/// # Arguments
///
/// * `path` - Path to the JSON document written by [`save_graph`]
///
/// # Returns
///
/// * `Ok(UrlGraph)` - The reloaded mapping
/// * `Err(ScrapeError)` - The file is missing, unreadable, or not a flat
///   URL-to-count object
pub fn load_graph(path: &Path) -> Result<UrlGraph> {
    let content = std::fs::read_to_string(path)?;
    let graph: UrlGraph = serde_json::from_str(&content)?;
    Ok(graph)
}

/// Persists a URL graph as a single JSON object
///
/// # Arguments
///
/// * `path` - Destination file; overwritten if present
/// * `graph` - The mapping to persist
pub fn save_graph(path: &Path, graph: &UrlGraph) -> Result<()> {
    let content = serde_json::to_string_pretty(graph)?;
    std::fs::write(path, content)?;
    Ok(())
}
