//! Change tally

use crate::cache::PageSource;
use crate::graph::UrlGraph;
use crate::Result;
use scraper::{Html, Selector};
use std::collections::BTreeMap;

/// Counts "changed"/"added" annotations on functions, grouped by version
///
/// Each annotation's version is reduced to a coarse two-digit code (see
/// [`version_code`]); the result is one `(count, code)` pair per code, sorted
/// by count descending. The sort is stable, so equal counts keep the
/// deterministic pre-sort order (codes ascending).
///
/// # Arguments
///
/// * `source` - The page source to fetch HTML through
/// * `graph` - The discovered URL set
pub async fn get_changes<S: PageSource>(
    source: &S,
    graph: &UrlGraph,
) -> Result<Vec<(u64, String)>> {
    let mut tally: BTreeMap<String, u64> = BTreeMap::new();

    for url in graph.keys() {
        let html = source.fetch_html(url).await?;
        tally_page(&html, &mut tally);
    }

    let mut changes: Vec<(u64, String)> = tally
        .into_iter()
        .map(|(version, count)| (count, version))
        .collect();
    changes.sort_by(|a, b| b.0.cmp(&a.0));

    tracing::debug!("{} version codes tallied", changes.len());
    Ok(changes)
}

fn tally_page(html: &str, tally: &mut BTreeMap<String, u64>) {
    let document = Html::parse_document(html);

    if let (Ok(blocks), Ok(changed), Ok(added)) = (
        Selector::parse("dl.function"),
        Selector::parse("span.versionmodified.changed"),
        Selector::parse("span.versionmodified.added"),
    ) {
        for block in document.select(&blocks) {
            for annotation in block.select(&changed).chain(block.select(&added)) {
                let text: String = annotation.text().collect();
                if let Some(code) = version_code(&text) {
                    *tally.entry(code).or_insert(0) += 1;
                }
            }
        }
    }
}

/// Reduces an annotation text to a coarse `d.d` version code
///
/// Takes the first two digit characters of the text: "Changed in version 3.9"
/// yields "3.9", but "New in version 3.10" yields "3.1". The truncation loses
/// precision for two-digit minor versions; this matches the documented tally
/// behavior and is preserved as-is. Texts with fewer than two digits have no
/// code and are skipped.
fn version_code(text: &str) -> Option<String> {
    let mut digits = text.chars().filter(char::is_ascii_digit);
    let major = digits.next()?;
    let minor = digits.next()?;
    Some(format!("{}.{}", major, minor))
}
