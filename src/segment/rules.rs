//! Title classification rules
//!
//! A block opens a new poem when every predicate in an ordered list holds.
//! The primary (quote-region) and fallback (whole-body) scans share the
//! list; the variants differ only in which optional checks are armed.

/// Which optional title checks are armed for a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleRules {
    /// Reject blocks containing the literal `Pulsa` (navigation text)
    pub forbid_pulsa: bool,

    /// Reject blocks whose lowercased text contains `www`
    pub forbid_www: bool,

    /// Reject blocks whose first line starts with a quotation mark
    pub forbid_quote_prefix: bool,
}

impl TitleRules {
    /// Rules for quote-region scanning: all checks armed
    pub fn primary() -> Self {
        Self {
            forbid_pulsa: true,
            forbid_www: true,
            forbid_quote_prefix: true,
        }
    }

    /// Rules for fallback scanning: only the shared checks
    pub fn fallback() -> Self {
        Self {
            forbid_pulsa: false,
            forbid_www: false,
            forbid_quote_prefix: false,
        }
    }
}

/// A block under title classification
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The block's full normalized text
    pub text: &'a str,

    /// The first line of the block
    pub first_line: &'a str,

    /// Number of lines in the block
    pub line_count: usize,
}

/// The ordered predicate list; evaluation short-circuits on first failure
const TITLE_PREDICATES: &[(&str, fn(&Candidate<'_>, &TitleRules) -> bool)] = &[
    ("line-count", |c, _| c.line_count <= 2),
    ("first-line-length", |c, _| {
        c.first_line.chars().count() < 100
    }),
    ("copyright-marker", |c, _| !c.text.contains('©')),
    ("volver-marker", |c, _| !c.text.contains("Volver")),
    ("pulsa-marker", |c, r| {
        !r.forbid_pulsa || !c.text.contains("Pulsa")
    }),
    ("www-marker", |c, r| {
        !r.forbid_www || !c.text.to_lowercase().contains("www")
    }),
    ("quote-prefix", |c, r| {
        !r.forbid_quote_prefix || !c.first_line.starts_with('"')
    }),
];

/// Classifies a block as a poem title
///
/// Runs the ordered predicate list, stopping at the first failure. Note
/// that a classified title still only opens a poem when its first line is
/// longer than three characters; that gate lives in the segmenter because
/// a short title-shaped block must fall through to body accumulation.
pub fn is_title(candidate: &Candidate<'_>, rules: &TitleRules) -> bool {
    for (name, predicate) in TITLE_PREDICATES {
        if !predicate(candidate, rules) {
            tracing::trace!(
                predicate = %name,
                first_line = %candidate.first_line,
                "not a title"
            );
            return false;
        }
    }
    true
}
