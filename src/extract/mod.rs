//! Extraction of words and links from parsed HTML
//!
//! This module contains the per-page logic of the crawler:
//! - Whitespace filtering of extracted text
//! - Collection of visible word tokens from the `<body>` element
//! - Discovery of internal links that are still worth following
//! - Small tree-search helpers over `scraper`'s node tree

mod content;
mod filter;
mod links;
mod tree;

pub use content::{extract_tokens, extract_tokens_into};
pub use filter::filter_text;
pub use links::{anchor_hrefs, is_followable};
pub use tree::{content_root, find_all_tags, find_tag};
