//! Availability scanner

use crate::cache::PageSource;
use crate::extract::block_id;
use crate::graph::UrlGraph;
use crate::Result;
use scraper::{Html, Selector};

/// Finds all functions that are available only on Linux/Unix systems
///
/// For each function block on each page, reads its availability note (a
/// comma-separated list of platform tags) and includes the block's identifier
/// if every tag mentions `Linux` or `Unix`. Blocks without an availability
/// note are skipped, not included.
///
/// # Arguments
///
/// * `source` - The page source to fetch HTML through
/// * `graph` - The discovered URL set; pages are scanned in graph key order
///
/// # Returns
///
/// Function identifiers in graph key order, document order within a page
pub async fn linux_only_availability<S: PageSource>(
    source: &S,
    graph: &UrlGraph,
) -> Result<Vec<String>> {
    let mut linux = Vec::new();

    for url in graph.keys() {
        let html = source.fetch_html(url).await?;
        collect_page(&html, &mut linux);
    }

    tracing::debug!("{} Linux/Unix-only functions found", linux.len());
    Ok(linux)
}

fn collect_page(html: &str, out: &mut Vec<String>) {
    let document = Html::parse_document(html);

    if let (Ok(blocks), Ok(notes)) = (
        Selector::parse("dl.function"),
        Selector::parse("p.availability"),
    ) {
        for block in document.select(&blocks) {
            if let Some(note) = block.select(&notes).next() {
                let text: String = note.text().collect();
                let only = text
                    .split(',')
                    .all(|tag| tag.contains("Linux") || tag.contains("Unix"));
                if only {
                    if let Some(id) = block_id(&block) {
                        out.push(id);
                    }
                }
            }
        }
    }
}
