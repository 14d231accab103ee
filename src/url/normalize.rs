use crate::UrlError;
use url::Url;

/// Normalizes an absolute URL into the key used by the frontier and link graph
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject anything other than http:// and https://
/// 3. Remove fragment (everything after #)
/// 4. Remove trailing slashes from the path, leaving the query untouched
///
/// Host lowercasing and dot-segment removal come from the `url` parser itself.
/// Normalizing an already normalized URL returns it unchanged.
///
/// # Arguments
///
/// * `url_str` - The URL string to normalize
///
/// # Returns
///
/// * `Ok(String)` - Normalized URL key
/// * `Err(UrlError)` - Failed to parse the URL or unsupported scheme
///
/// # Examples
///
/// ```
/// use sitecrawl::url::normalize_url;
///
/// let url = normalize_url("http://EXAMPLE.COM/docs/#intro").unwrap();
/// assert_eq!(url, "http://example.com/docs");
/// ```
pub fn normalize_url(url_str: &str) -> Result<String, UrlError> {
    let url = Url::parse(url_str.trim())?;
    finish(url)
}

/// Resolves a raw href against the page it was found on
///
/// Absolute hrefs are taken as-is, relative ones are joined onto `base`. The
/// result is normalized the same way as [`normalize_url`].
///
/// # Arguments
///
/// * `base` - The URL of the page containing the href
/// * `href` - The raw href attribute value
///
/// # Examples
///
/// ```
/// use sitecrawl::url::resolve_href;
///
/// let url = resolve_href("https://example.com/guide/", "../about/").unwrap();
/// assert_eq!(url, "https://example.com/about");
/// ```
pub fn resolve_href(base: &str, href: &str) -> Result<String, UrlError> {
    let base = Url::parse(base.trim())?;
    let joined = base.join(href.trim())?;
    finish(joined)
}

fn finish(mut url: Url) -> Result<String, UrlError> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::UnsupportedScheme(url.scheme().to_string()));
    }

    url.set_fragment(None);

    // Trailing path slashes only; the query keeps its own
    let path = url.path().trim_end_matches('/').to_string();
    url.set_path(&path);

    let serialized = url.as_str();
    if url.query().is_none() {
        // http(s) keeps a bare "/" for the root path
        return Ok(serialized.trim_end_matches('/').to_string());
    }

    Ok(serialized.to_string())
}
