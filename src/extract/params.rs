//! Parameter scanner

use crate::cache::PageSource;
use crate::extract::block_id;
use crate::graph::UrlGraph;
use crate::Result;
use scraper::{Html, Selector};

/// Functions must declare strictly more parameters than this to be reported
const PARAM_THRESHOLD: usize = 10;

/// Finds functions that accept more than 10 parameters
///
/// Counts the parameter markers (`<em class="sig-param">`) of each function
/// block and reports `(count, identifier)` pairs for blocks exceeding the
/// threshold, sorted by count descending. A function with exactly 10
/// parameters is not included. The sort is stable, so equal counts keep the
/// scan order (graph key order, document order within a page).
///
/// # Arguments
///
/// * `source` - The page source to fetch HTML through
/// * `graph` - The discovered URL set
pub async fn get_most_params<S: PageSource>(
    source: &S,
    graph: &UrlGraph,
) -> Result<Vec<(u64, String)>> {
    let mut most = Vec::new();

    for url in graph.keys() {
        let html = source.fetch_html(url).await?;
        scan_page(&html, &mut most);
    }

    most.sort_by(|a, b| b.0.cmp(&a.0));

    tracing::debug!("{} functions over the parameter threshold", most.len());
    Ok(most)
}

fn scan_page(html: &str, out: &mut Vec<(u64, String)>) {
    let document = Html::parse_document(html);

    if let (Ok(blocks), Ok(params)) = (
        Selector::parse("dl.function"),
        Selector::parse("em.sig-param"),
    ) {
        for block in document.select(&blocks) {
            let count = block.select(&params).count();
            if count > PARAM_THRESHOLD {
                if let Some(id) = block_id(&block) {
                    out.push((count as u64, id));
                }
            }
        }
    }
}
