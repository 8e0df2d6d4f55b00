//! Poem records and deduplication

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One extracted poem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemRecord {
    /// Author as derived from the page title metadata
    pub author: String,

    /// Poem title, whitespace-normalized
    pub title: String,

    /// Newline-joined poem body, strictly longer than 50 characters
    pub body: String,

    /// URL of the page the poem was extracted from
    pub source: String,
}

impl PoemRecord {
    /// The dedup identity key; case- and whitespace-sensitive as normalized
    pub fn identity(&self) -> (&str, &str) {
        (&self.author, &self.title)
    }
}

/// Collapses records sharing an identity key, keeping the first occurrence
///
/// Runs a single pass in discovery order, so for duplicate keys the record
/// from the earliest-processed page survives.
pub fn dedup_records(records: Vec<PoemRecord>) -> Vec<PoemRecord> {
    let total = records.len();
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(total);
    let mut unique = Vec::with_capacity(total);

    for record in records {
        let (author, title) = record.identity();
        let key = (author.to_string(), title.to_string());
        if seen.insert(key) {
            unique.push(record);
        }
    }

    let dropped = total - unique.len();
    if dropped > 0 {
        tracing::info!(dropped, kept = unique.len(), "dropped duplicate records");
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(author: &str, title: &str, body: &str) -> PoemRecord {
        PoemRecord {
            author: author.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            source: "https://amediavoz.com/neruda.htm".to_string(),
        }
    }

    #[test]
    fn test_dedup_first_wins() {
        let records = vec![
            record("Neruda", "Poema 20", "x"),
            record("Neruda", "Poema 20", "y"),
        ];
        let unique = dedup_records(records);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].body, "x");
    }

    #[test]
    fn test_dedup_distinguishes_authors() {
        let records = vec![
            record("Neruda", "Nocturno", "a"),
            record("Silva", "Nocturno", "b"),
        ];
        assert_eq!(dedup_records(records).len(), 2);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let records = vec![
            record("Neruda", "Poema 20", "a"),
            record("Neruda", "POEMA 20", "b"),
        ];
        assert_eq!(dedup_records(records).len(), 2);
    }

    #[test]
    fn test_dedup_preserves_discovery_order() {
        let records = vec![
            record("B", "t", "1"),
            record("A", "t", "2"),
            record("B", "t", "3"),
            record("C", "t", "4"),
        ];
        let unique = dedup_records(records);
        let bodies: Vec<&str> = unique.iter().map(|r| r.body.as_str()).collect();
        assert_eq!(bodies, vec!["1", "2", "4"]);
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup_records(Vec::new()).is_empty());
    }
}
