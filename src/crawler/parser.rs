//! HTML analyzer for extracting page text, metadata and links
//!
//! This module handles parsing HTML content to extract:
//! - Visible text (used for keyword extraction)
//! - Page title and meta description
//! - Links to follow (from <a href> tags)
//!
//! Parsing is error-tolerant: broken markup yields whatever html5ever could
//! recover, never an error.

use crate::url::normalize_parsed;
use scraper::{Html, Node, Selector};
use url::Url;

/// Elements whose text content is never rendered
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Structured view of a fetched page
#[derive(Debug, Clone, Default)]
pub struct PageView {
    /// All visible text of the document, concatenated in document order
    pub text: String,

    /// The page title (from the first <title> tag)
    pub title: Option<String>,

    /// The `content` of `<meta name="description">`
    pub description: Option<String>,

    /// All links found on the page (absolute, fragment removed), in markup order
    pub links: Vec<Url>,
}

/// Parses HTML content and extracts text, metadata and links
///
/// # Link Extraction Rules
///
/// Every `<a href="...">` is resolved against `base_url`. Links that do not
/// resolve, or resolve to something other than `http`/`https` (`mailto:`,
/// `javascript:`, `tel:`, data URIs), are skipped. Duplicates are kept; the
/// crawl's visited set takes care of them.
///
/// # Example
///
/// ```
/// use seed_crawl::crawler::analyze;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let page = analyze(&base_url, html);
/// assert_eq!(page.title, Some("Test".to_string()));
/// assert_eq!(page.links[0].as_str(), "https://example.com/page");
/// ```
pub fn analyze(base_url: &Url, html: &str) -> PageView {
    let document = Html::parse_document(html);

    PageView {
        text: extract_text(&document),
        title: extract_title(&document),
        description: extract_description(&document),
        links: extract_links(&document, base_url),
    }
}

/// Concatenates every text node that is not inside an invisible element
fn extract_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        let Node::Text(fragment) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| INVISIBLE_ELEMENTS.contains(&element.name()))
        });

        if !hidden {
            text.push_str(fragment);
        }
    }

    text
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts the meta description from the HTML document
///
/// Only the first `<meta name="description">` is considered.
fn extract_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts all valid links from the HTML document
fn extract_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

/// Resolves a link href to an absolute URL
///
/// Returns None for hrefs that fail to resolve or that resolve to a
/// non-HTTP(S) URL.
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let absolute_url = base_url.join(href.trim()).ok()?;
    normalize_parsed(absolute_url).ok()
}
