//! Explicit traversal state
//!
//! Frontier, visited set, and accumulator live in one value owned by the
//! controller and passed through its operations, never in a global. All
//! three grow monotonically for the run's lifetime.

use crate::records::PoemRecord;
use std::collections::{BTreeSet, HashSet};
use url::Url;

/// The controller's mutable state for one run
#[derive(Debug, Default)]
pub struct TraversalState {
    /// Discovered top-level URLs; ordered, so iteration is lexicographic
    pub frontier: BTreeSet<Url>,

    /// Every URL already processed (including failed ones)
    pub visited: HashSet<Url>,

    /// All records in discovery order, pre-dedup
    pub records: Vec<PoemRecord>,
}

impl TraversalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the URL was already processed
    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url)
    }

    /// Marks a URL as processed; no entry is processed twice
    pub fn mark_visited(&mut self, url: Url) {
        self.visited.insert(url);
    }

    /// Whether the URL is a top-level frontier member
    pub fn in_frontier(&self, url: &Url) -> bool {
        self.frontier.contains(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(path: &str) -> Url {
        Url::parse(&format!("https://amediavoz.com/{}", path)).unwrap()
    }

    #[test]
    fn test_visited_tracking() {
        let mut state = TraversalState::new();
        assert!(!state.is_visited(&url("neruda.htm")));

        state.mark_visited(url("neruda.htm"));
        assert!(state.is_visited(&url("neruda.htm")));
        assert!(!state.is_visited(&url("mistral.htm")));
    }

    #[test]
    fn test_frontier_iterates_lexicographically() {
        let mut state = TraversalState::new();
        state.frontier.insert(url("neruda.htm"));
        state.frontier.insert(url("benedetti.htm"));
        state.frontier.insert(url("mistral.htm"));

        let order: Vec<String> = state.frontier.iter().map(|u| u.to_string()).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }
}
