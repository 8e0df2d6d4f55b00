//! URL stem helpers for the same-author subpage heuristic

use url::Url;

/// Returns the filename stem of a URL: the final path segment without its
/// extension. `https://amediavoz.com/neruda2.htm` yields `neruda2`.
pub fn stem(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("");

    match segment.rsplit_once('.') {
        Some((name, _ext)) => name.to_string(),
        None => segment.to_string(),
    }
}

/// Same-author heuristic over two stems
///
/// A candidate counts as the same author when one stem contains the other,
/// or the candidate starts with the first five characters of the seed stem
/// (so `neruda` picks up `nerudacartas`). Empty stems never match; with a
/// substring test they would match everything.
pub fn same_author(seed: &str, candidate: &str) -> bool {
    if seed.is_empty() || candidate.is_empty() {
        return false;
    }

    if candidate.contains(seed) || seed.contains(candidate) {
        return true;
    }

    let prefix: String = seed.chars().take(5).collect();
    candidate.starts_with(&prefix)
}
