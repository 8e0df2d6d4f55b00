//! Poem segmentation state machine
//!
//! This is the heuristic core of the crate: it folds one region's block
//! sequence into poem records. The machine carries an optional open title
//! and a body line buffer:
//!
//! - A block containing an image is a hard separator: the open poem, if
//!   any, is emitted.
//! - A block classified as a title (see [`rules`]) whose first line is
//!   longer than three characters emits the open poem and starts a new
//!   one; the block's remaining lines seed the new body.
//! - Every other block appends its lines to the body. Lines accumulated
//!   while no title is open are kept in the buffer; if no title ever
//!   opens they are dropped when the region ends, with no diagnostic.
//!   This is deliberate heuristic behavior, not an oversight.
//!
//! Emission only produces a record when the newline-joined body is
//! strictly longer than 50 characters; shorter buffers are discarded
//! silently.

mod rules;

pub use rules::{is_title, Candidate, TitleRules};

use crate::extract::{normalize_whitespace, PageContent, TextBlock};
use crate::records::PoemRecord;

/// Joined bodies at or under this length are discarded at emission
const MIN_BODY_CHARS: usize = 50;

/// A title's first line must be longer than this to open a poem
const MIN_TITLE_CHARS: usize = 3;

/// Segmentation state for one region
#[derive(Debug)]
pub struct Segmenter<'a> {
    rules: TitleRules,
    author: &'a str,
    source: &'a str,
    title: Option<String>,
    body: Vec<String>,
}

impl<'a> Segmenter<'a> {
    /// Creates a segmenter for one region
    ///
    /// # Arguments
    ///
    /// * `rules` - Title rules variant (primary or fallback)
    /// * `author` - The page's derived author, stamped on every record
    /// * `source` - The page URL, stamped on every record
    pub fn new(rules: TitleRules, author: &'a str, source: &'a str) -> Self {
        Self {
            rules,
            author,
            source,
            title: None,
            body: Vec::new(),
        }
    }

    /// Feeds one block through the machine, appending any emitted record
    pub fn push_block(&mut self, block: &TextBlock, out: &mut Vec<PoemRecord>) {
        if block.has_image {
            // Hard separator; the block contributes nothing further
            self.emit(out);
            return;
        }

        let lines: Vec<&str> = block.text.split('\n').collect();
        let first_line = lines.first().copied().unwrap_or("");
        let candidate = Candidate {
            text: &block.text,
            first_line,
            line_count: lines.len(),
        };

        if is_title(&candidate, &self.rules) && first_line.chars().count() > MIN_TITLE_CHARS {
            self.emit(out);
            self.title = Some(normalize_whitespace(first_line));
            self.body
                .extend(lines[1..].iter().map(|line| line.to_string()));
        } else {
            self.body.extend(lines.iter().map(|line| line.to_string()));
        }
    }

    /// Ends the region, emitting the open poem if any
    pub fn finish(mut self, out: &mut Vec<PoemRecord>) {
        self.emit(out);
    }

    /// Emits the open poem when a title is open and the body is non-empty,
    /// clearing both. Buffers failing that precondition are left intact:
    /// an open title with no lines survives an image separator, and
    /// untitled lines attach to the next title that opens.
    fn emit(&mut self, out: &mut Vec<PoemRecord>) {
        if self.body.is_empty() {
            return;
        }
        let Some(title) = self.title.take() else {
            return;
        };

        let body = std::mem::take(&mut self.body).join("\n");
        if body.chars().count() > MIN_BODY_CHARS {
            out.push(PoemRecord {
                author: self.author.to_string(),
                title,
                body,
                source: self.source.to_string(),
            });
        }
    }
}

/// Segments a whole page's content into poem records
///
/// Runs the primary scan over every quote region independently; if all
/// regions together yield zero records, reruns over the fallback region
/// with the relaxed rules.
pub fn segment_page(content: &PageContent, source: &str) -> Vec<PoemRecord> {
    let mut records = Vec::new();

    for region in &content.regions {
        let mut segmenter = Segmenter::new(TitleRules::primary(), &content.author, source);
        for block in region {
            segmenter.push_block(block, &mut records);
        }
        segmenter.finish(&mut records);
    }

    if records.is_empty() {
        let mut segmenter = Segmenter::new(TitleRules::fallback(), &content.author, source);
        for block in &content.fallback {
            segmenter.push_block(block, &mut records);
        }
        segmenter.finish(&mut records);
    }

    records
}
