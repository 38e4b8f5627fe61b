use url::Url;

/// Resolves an anchor `href` against the page it appeared on
///
/// # Resolution Steps
///
/// 1. Strip any fragment component (everything from `#` on)
/// 2. Resolve the remainder against the page's own URL
/// 3. Drop any fragment the resolution may have produced
///
/// A fragment-only or empty `href` resolves to the page itself, so self-links
/// survive resolution and are counted by the crawler.
///
/// # Arguments
///
/// * `page_url` - The URL of the page the anchor appeared on
/// * `href` - The raw `href` attribute value
///
/// # Returns
///
/// * `Some(Url)` - The resolved absolute URL
/// * `None` - The href could not be resolved (malformed relative reference)
///
/// # Examples
///
/// ```
/// use docscrape::url::resolve_href;
/// use url::Url;
///
/// let page = Url::parse("https://docs.example.com/library/os.html").unwrap();
/// let resolved = resolve_href(&page, "io.html#section").unwrap();
/// assert_eq!(resolved.as_str(), "https://docs.example.com/library/io.html");
/// ```
pub fn resolve_href(page_url: &Url, href: &str) -> Option<Url> {
    // Step 1: Strip the fragment before resolving
    let href = match href.find('#') {
        Some(idx) => &href[..idx],
        None => href,
    };

    // Step 2: Resolve against the referring page
    let mut resolved = page_url.join(href).ok()?;

    // Step 3: The base itself may carry a fragment; never keep one
    resolved.set_fragment(None);

    Some(resolved)
}
