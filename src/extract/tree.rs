//! Tree-search helpers over `scraper`'s node tree

use scraper::ElementRef;

/// Finds the first descendant element named `name`
///
/// The search is depth first in document order and does not consider
/// `root` itself.
pub fn find_tag<'a>(root: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == name)
}

/// Finds every descendant element named `name`, in document order
pub fn find_all_tags<'a>(
    root: ElementRef<'a>,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |element| element.value().name() == name)
}

/// Returns the element whose children carry the page text
///
/// This is the `<body>` element below `root` when there is one, otherwise
/// `root` itself.
pub fn content_root(root: ElementRef<'_>) -> ElementRef<'_> {
    match find_tag(root, "body") {
        Some(body) => body,
        None => root,
    }
}
