//! Anchor extraction for the crawler

use crate::url::{resolve_href, ScopeFilter};
use scraper::{Html, Selector};
use url::Url;

/// Extracts a page's in-scope link targets, in document order
///
/// Every `<a href>` is considered. Fragments are stripped, the remainder is
/// resolved against the page's own URL, and targets that fail to resolve or
/// fall outside the scope filter are dropped. Repeated targets are kept:
/// the crawler counts every hyperlink occurrence, not distinct targets.
///
/// # Arguments
///
/// * `html` - The page content
/// * `page_url` - The URL the page was fetched from
/// * `scope` - The site-scope filter
///
/// # Returns
///
/// The resolved in-scope targets in the order their anchors appear
pub fn extract_page_links(html: &str, page_url: &Url, scope: &ScopeFilter) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(resolved) = resolve_href(page_url, href) {
                    if scope.contains(&resolved) {
                        links.push(resolved);
                    }
                }
            }
        }
    }

    links
}
