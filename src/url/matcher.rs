/// Checks whether a URL falls inside the crawl's search prefix
///
/// The prefix is matched as a plain substring anywhere in the URL, not only at
/// the start. Giving a bare root domain such as `example.edu` therefore keeps
/// every subdomain (`www.example.edu`, `cs.example.edu`) in scope.
///
/// # Examples
///
/// ```
/// use sitecrawl::url::matches_prefix;
///
/// assert!(matches_prefix("example.edu", "https://cs.example.edu/courses"));
/// assert!(!matches_prefix("example.edu", "https://other.org/"));
/// ```
pub fn matches_prefix(prefix: &str, candidate: &str) -> bool {
    candidate.contains(prefix)
}
