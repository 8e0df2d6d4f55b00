//! Block extraction from parsed pages
//!
//! This module turns a parsed page into ordered sequences of classified
//! text blocks for the segmenter:
//! - The primary scan walks `blockquote` regions; each region is segmented
//!   independently, so a poem never spans two regions.
//! - The fallback scan flattens every `body` paragraph into a single
//!   region; the traversal layer uses it only when the primary scan yields
//!   nothing on the whole page.
//!
//! It also derives the page author from the `<title>` metadata.

use scraper::{ElementRef, Html, Selector};

/// Author used when a page carries no usable title metadata
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Fallback paragraphs shorter than this are noise (navigation glyphs,
/// stray punctuation) and are dropped before segmentation.
const FALLBACK_MIN_CHARS: usize = 5;

/// One paragraph, normalized, with the structural facts the segmenter needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    /// Normalized text: visual line breaks joined with `\n`, whitespace
    /// runs collapsed within each line
    pub text: String,

    /// A descendant `img` element is present
    pub has_image: bool,

    /// A descendant `a` element is present (informational only)
    pub has_link: bool,
}

/// Everything the segmenter needs from one page
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Author derived from the page title, trimmed
    pub author: String,

    /// Primary scan: one block list per quote region, in document order
    pub regions: Vec<Vec<TextBlock>>,

    /// Fallback scan: every body paragraph as a single flat region
    pub fallback: Vec<TextBlock>,
}

/// Extracts author, primary regions, and the fallback region from a page
pub fn extract_page(document: &Html) -> PageContent {
    PageContent {
        author: page_author(document),
        regions: quote_regions(document),
        fallback: fallback_blocks(document),
    }
}

/// Derives the page author from `<title>`, trimmed, defaulting to
/// [`UNKNOWN_AUTHOR`] when the element is missing or empty.
pub fn page_author(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return UNKNOWN_AUTHOR.to_string();
    };

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

/// Collects the primary scan regions: one block list per `blockquote`
fn quote_regions(document: &Html) -> Vec<Vec<TextBlock>> {
    let Ok(region_selector) = Selector::parse("blockquote") else {
        return Vec::new();
    };

    document
        .select(&region_selector)
        .map(|region| paragraph_blocks(region, 1))
        .collect()
}

/// Collects the fallback region: every paragraph under `body`, flat
fn fallback_blocks(document: &Html) -> Vec<TextBlock> {
    let Ok(body_selector) = Selector::parse("body") else {
        return Vec::new();
    };

    document
        .select(&body_selector)
        .next()
        .map(|body| paragraph_blocks(body, FALLBACK_MIN_CHARS))
        .unwrap_or_default()
}

/// Builds the ordered block list for the paragraphs under one element,
/// dropping blocks whose normalized text is shorter than `min_chars`.
fn paragraph_blocks(container: ElementRef, min_chars: usize) -> Vec<TextBlock> {
    let Ok(p_selector) = Selector::parse("p") else {
        return Vec::new();
    };

    container
        .select(&p_selector)
        .filter_map(|paragraph| paragraph_block(paragraph, min_chars))
        .collect()
}

/// Normalizes one paragraph into a block, or drops it as too short
fn paragraph_block(paragraph: ElementRef, min_chars: usize) -> Option<TextBlock> {
    let text = normalized_text(paragraph);
    if text.chars().count() < min_chars {
        return None;
    }

    Some(TextBlock {
        text,
        has_image: has_descendant(paragraph, "img"),
        has_link: has_descendant(paragraph, "a"),
    })
}

/// Joins a paragraph's text nodes with `\n`, collapsing whitespace runs
/// within each node and dropping nodes that normalize to nothing. Line
/// breaks rendered by the markup (`<br>`, inline element boundaries)
/// become the separator.
fn normalized_text(element: ElementRef) -> String {
    let lines: Vec<String> = element
        .text()
        .map(normalize_whitespace)
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

/// Collapses internal whitespace runs to single spaces and trims the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn has_descendant(element: ElementRef, tag: &str) -> bool {
    Selector::parse(tag)
        .map(|selector| element.select(&selector).next().is_some())
        .unwrap_or(false)
}
