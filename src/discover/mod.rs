//! Link discovery
//!
//! This module extracts candidate page URLs from a parsed document:
//! - Index-page discovery, which seeds the traversal frontier
//! - Same-author subpage candidates, expanded one level deep by the
//!   traversal controller
//!
//! Both scans are pure functions of a single page; neither recurses.

mod stem;

pub use stem::{same_author, stem};

use crate::config::SiteConfig;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Checks a URL against the exclusion pattern list
///
/// Matching is a case-insensitive substring test, so `indice` knocks out
/// every index page variant and `mailto:` covers pseudo-links.
pub fn is_excluded(url: &str, patterns: &[String]) -> bool {
    let lower = url.to_lowercase();
    patterns
        .iter()
        .any(|pattern| lower.contains(&pattern.to_lowercase()))
}

/// Discovers poem page URLs on one page
///
/// For each anchor whose href ends in the page extension and passes the
/// exclusion filter: resolve it against `page_url`, then keep it only if
/// the absolute form contains the base URL and still passes the exclusion
/// filter (resolution can introduce new matches). The result is a set, so
/// duplicates collapse and iteration order is lexicographic.
///
/// # Arguments
///
/// * `page_url` - The page the anchors were found on, used for resolution
/// * `document` - The parsed page
/// * `site` - Site configuration (base URL, extension, exclusion patterns)
///
/// # Returns
///
/// The set of absolute URLs that survived every filter
pub fn discover(page_url: &Url, document: &Html, site: &SiteConfig) -> BTreeSet<Url> {
    let mut links = BTreeSet::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            if !href.ends_with(&site.page_extension) {
                continue;
            }
            if is_excluded(href, &site.exclude_patterns) {
                continue;
            }

            let Ok(resolved) = page_url.join(href) else {
                continue;
            };

            if !resolved.as_str().contains(&site.base_url) {
                continue;
            }
            if is_excluded(resolved.as_str(), &site.exclude_patterns) {
                continue;
            }

            links.insert(resolved);
        }
    }

    links
}

/// Collects same-author subpage candidates from a poet page
///
/// An anchor qualifies when it ends in the page extension, passes the
/// exclusion filter, resolves without a fragment to a URL different from
/// the page itself, and its stem passes the same-author heuristic against
/// the page's own stem. Whether a candidate is actually fetched is decided
/// by the traversal controller (unvisited, not a frontier member).
pub fn subpage_candidates(page_url: &Url, document: &Html, site: &SiteConfig) -> BTreeSet<Url> {
    let seed_stem = stem(page_url);
    let mut candidates = BTreeSet::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            if !href.ends_with(&site.page_extension) {
                continue;
            }
            if is_excluded(href, &site.exclude_patterns) {
                continue;
            }

            let Ok(resolved) = page_url.join(href) else {
                continue;
            };

            if resolved.fragment().is_some() || resolved == *page_url {
                continue;
            }

            if same_author(&seed_stem, &stem(&resolved)) {
                candidates.insert(resolved);
            }
        }
    }

    candidates
}
