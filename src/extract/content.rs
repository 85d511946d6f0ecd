use crate::extract::filter::filter_text;
use crate::extract::tree::content_root;
use crate::state::CrawlState;
use scraper::ElementRef;

/// Collects the visible word tokens below `root`
///
/// Only the direct children of the content root (`<body>`, or `root` when
/// there is no body) are inspected. Each child element contributes the full
/// text of its subtree; bare text directly under the content root does not
/// contribute at all.
///
/// # Examples
///
/// ```
/// use scraper::Html;
/// use wordfreq_crawler::extract::extract_tokens;
///
/// let html = Html::parse_document("<p>This is a slimy text and <i> I am slimer</i></p>");
/// let tokens = extract_tokens(html.root_element());
/// assert_eq!(tokens, ["This", "is", "a", "slimy", "text", "and", "I", "am", "slimer"]);
/// ```
pub fn extract_tokens(root: ElementRef<'_>) -> Vec<String> {
    let mut tokens = Vec::new();

    for child in content_root(root).children() {
        // Text outside of a tag is not part of the page content
        if let Some(element) = ElementRef::wrap(child) {
            let text = filter_text(&element.text().collect::<String>());
            tokens.extend(split_words(&text));
        }
    }

    tokens
}

/// Appends the tokens of `root` to the crawl state
pub fn extract_tokens_into(root: ElementRef<'_>, state: &mut CrawlState) {
    state.extend_tokens(extract_tokens(root));
}

fn split_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(char::is_whitespace)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
}
