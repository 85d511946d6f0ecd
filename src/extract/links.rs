//! Internal link discovery
//!
//! A link is internal when its `href` starts with the seed URL. This is a
//! plain string-prefix test: no resolution of relative links and no
//! normalization of scheme, host case or trailing slashes.

use crate::extract::tree::find_all_tags;
use crate::state::CrawlState;
use scraper::ElementRef;

/// Returns the `href` of every anchor below `root`, in document order
///
/// Anchors without an `href` attribute are left out. Duplicates are kept;
/// whether a link is still worth following is decided when it is reached.
pub fn anchor_hrefs(root: ElementRef<'_>) -> Vec<String> {
    find_all_tags(root, "a")
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Returns true if `href` should be crawled next
///
/// # Rules
///
/// - `href` is non-empty
/// - `href` starts with `seed`
/// - `href` has not been visited yet
pub fn is_followable(href: &str, seed: &str, state: &CrawlState) -> bool {
    !href.is_empty() && href.starts_with(seed) && !state.is_visited(href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const SEED: &str = "https://www.314e.com/";

    #[test]
    fn test_anchor_hrefs_in_document_order() {
        let html = Html::parse_document(
            r#"<p><a href="https://www.314e.com/a">This</a> is a slimy text and <a href="https://www.314e.com/b">URL2</a><a name="top">no href</a></p>"#,
        );
        assert_eq!(
            anchor_hrefs(html.root_element()),
            vec!["https://www.314e.com/a", "https://www.314e.com/b"]
        );
    }

    fn followable(html: &Html, state: &CrawlState) -> Vec<String> {
        anchor_hrefs(html.root_element())
            .into_iter()
            .filter(|href| is_followable(href, SEED, state))
            .collect()
    }

    #[test]
    fn test_internal_links_are_followable() {
        let html = Html::parse_document(
            r#"<p><a href="https://www.314e.com/a">This</a> is a slimy text and <a href="https://www.314e.com/b">URL2</a></p>"#,
        );
        let state = CrawlState::new();

        assert_eq!(
            followable(&html, &state),
            vec!["https://www.314e.com/a", "https://www.314e.com/b"]
        );
    }

    #[test]
    fn test_external_and_relative_links_are_not_followable() {
        let html = Html::parse_document(
            r#"<div>
                <a href="https://other.com/">External</a>
                <a href="/relative">Relative</a>
                <a href="">Empty</a>
                <a href="http://www.314e.com/insecure">Other scheme</a>
                <a href="https://www.314e.com/kept">Kept</a>
            </div>"#,
        );
        let state = CrawlState::new();

        assert_eq!(followable(&html, &state), vec!["https://www.314e.com/kept"]);
    }

    #[test]
    fn test_repeated_hrefs_are_kept_until_visited() {
        let html = Html::parse_document(
            r#"<a href="https://www.314e.com/">Home</a><a href="https://www.314e.com/a">A</a><a href="https://www.314e.com/a">A again</a>"#,
        );
        let mut state = CrawlState::new();
        state.mark_visited(SEED);

        let links = followable(&html, &state);
        assert_eq!(links, vec!["https://www.314e.com/a", "https://www.314e.com/a"]);

        // Once the first copy is crawled, the second no longer qualifies
        state.mark_visited(&links[0]);
        assert!(!is_followable(&links[1], SEED, &state));
    }

    #[test]
    fn test_followable_links_always_match_seed_and_are_new() {
        let html = Html::parse_document(
            r#"<a href="https://www.314e.com/x">x</a><a href="https://www.314e.co">short</a><a href="mailto:a@b.c">mail</a><a href="https://www.314e.com/y">y</a>"#,
        );
        let mut state = CrawlState::new();
        state.mark_visited("https://www.314e.com/y");

        let links = followable(&html, &state);
        assert_eq!(links, vec!["https://www.314e.com/x"]);
        for link in &links {
            assert!(link.starts_with(SEED));
            assert!(!state.is_visited(link));
        }
    }

    #[test]
    fn test_is_followable() {
        let mut state = CrawlState::new();
        assert!(is_followable("https://www.314e.com/about", SEED, &state));
        assert!(is_followable(SEED, SEED, &state));
        assert!(!is_followable("", SEED, &state));
        assert!(!is_followable("https://www.314e.co", SEED, &state));

        state.mark_visited("https://www.314e.com/about");
        assert!(!is_followable("https://www.314e.com/about", SEED, &state));
    }
}
