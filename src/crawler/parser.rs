//! HTML parsing for a fetched page
//!
//! The parsed tree only lives inside `parse_html`. What the crawler keeps is
//! the page's word tokens and the `href` of each anchor.

use crate::extract::{anchor_hrefs, extract_tokens};
use scraper::Html;

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Visible word tokens, in document order
    pub tokens: Vec<String>,

    /// `href` of every anchor, in document order
    pub anchors: Vec<String>,
}

/// Parses HTML content and extracts tokens and anchors
///
/// html5ever recovers from malformed markup, so parsing itself cannot fail.
///
/// # Example
///
/// ```
/// use wordfreq_crawler::crawler::parse_html;
///
/// let parsed = parse_html(r#"<p><a href="https://example.com/a">This</a> is</p>"#);
/// assert_eq!(parsed.tokens, vec!["This", "is"]);
/// assert_eq!(parsed.anchors, vec!["https://example.com/a"]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);
    let root = document.root_element();

    ParsedPage {
        tokens: extract_tokens(root),
        anchors: anchor_hrefs(root),
    }
}
