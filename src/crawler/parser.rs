//! HTML link extraction
//!
//! This module pulls raw href values out of page content. Resolving them
//! against the page URL and deciding which to follow is left to the crawler.

use scraper::{Html, Selector};

/// Extracts raw link targets from page content
pub trait LinkExtractor {
    /// Returns every href found in `content`, in document order
    fn extract_hrefs(&self, content: &str) -> Vec<String>;
}

/// [`LinkExtractor`] that reads `<a href="...">` tags with an HTML5 parser
///
/// # Extraction Rules
///
/// **Include:**
/// - every `<a>` element carrying an `href`, anywhere in the document
///
/// **Exclude:**
/// - empty or whitespace-only hrefs
///
/// Hrefs are returned exactly as written apart from surrounding whitespace;
/// relative references, fragments, and non-HTTP schemes are all passed through.
///
/// # Example
///
/// ```
/// use sitecrawl::crawler::{HtmlLinkExtractor, LinkExtractor};
///
/// let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
/// let hrefs = HtmlLinkExtractor.extract_hrefs(html);
/// assert_eq!(hrefs, vec!["/page".to_string()]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_hrefs(&self, content: &str) -> Vec<String> {
        if content.is_empty() {
            return Vec::new();
        }

        let document = Html::parse_document(content);
        let mut hrefs = Vec::new();

        if let Ok(a_selector) = Selector::parse("a[href]") {
            for element in document.select(&a_selector) {
                if let Some(href) = element.value().attr("href") {
                    let href = href.trim();
                    if !href.is_empty() {
                        hrefs.push(href.to_string());
                    }
                }
            }
        }

        hrefs
    }
}
