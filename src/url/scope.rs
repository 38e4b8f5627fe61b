use url::Url;

/// Decides whether a resolved link belongs to the crawled site
///
/// A candidate is in scope when its scheme, host, and port all equal the base
/// URL's and its path starts with the base URL's path. This is a strict
/// comparison against the parsed base, not a substring check, so a URL on a
/// different host that merely contains the base string as text is out of scope.
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    base: Url,
}

impl ScopeFilter {
    /// Creates a scope filter for the given base URL
    pub fn new(base: &Url) -> Self {
        Self { base: base.clone() }
    }

    /// Returns true if the candidate URL is within the crawled site
    ///
    /// # Examples
    ///
    /// ```
    /// use docscrape::url::ScopeFilter;
    /// use url::Url;
    ///
    /// let base = Url::parse("https://docs.example.com/library/").unwrap();
    /// let scope = ScopeFilter::new(&base);
    ///
    /// let inside = Url::parse("https://docs.example.com/library/os.html").unwrap();
    /// assert!(scope.contains(&inside));
    ///
    /// let outside = Url::parse("https://mirror.net/docs.example.com/library/").unwrap();
    /// assert!(!scope.contains(&outside));
    /// ```
    pub fn contains(&self, candidate: &Url) -> bool {
        candidate.scheme() == self.base.scheme()
            && candidate.host_str() == self.base.host_str()
            && candidate.port_or_known_default() == self.base.port_or_known_default()
            && candidate.path().starts_with(self.base.path())
    }
}
