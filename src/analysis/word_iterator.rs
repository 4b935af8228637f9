//! Word iteration over a text buffer.
//!
//! [`WordIterator`] owns the scan table for one (language, mode) pair and is
//! reused across texts; [`SegmentCursor`] is one lazy, forward-only pass over
//! a borrowed buffer. Boundary detection starts from the Unicode word
//! boundary rules (UAX #29) and is then shaped by the [`ScanRules`]: the
//! lenient mode glues hyphen-joined tokens back together, the strict mode
//! splits tokens at every internal non-word character.
//!
//! # Examples
//!
//! ```
//! use wordsieve::analysis::{
//!     CharacterAttributes, SegmentStatus, SegmentationMode, WordIterator,
//! };
//!
//! let mut attributes = CharacterAttributes::new();
//! attributes.set_default_language("en-US");
//!
//! let iterator = WordIterator::new(&attributes, SegmentationMode::KeepContractions).unwrap();
//! let words: Vec<_> = iterator.collect_words("Hello, world!");
//! assert_eq!(words, vec!["Hello", "world"]);
//! ```

use std::collections::VecDeque;

use unicode_segmentation::{UWordBoundIndices, UnicodeSegmentation};

use crate::analysis::attributes::{CharacterAttributes, ScanRules, SegmentationMode};
use crate::error::Result;

/// Classification of one scanned segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentStatus<'t> {
    /// A spelling candidate, with byte offsets into the scanned buffer.
    Word {
        /// The candidate text, borrowed from the scanned buffer.
        text: &'t str,
        /// Byte offset of the first byte of the candidate.
        start: usize,
        /// Byte length of the candidate.
        length: usize,
    },
    /// A run the caller skips silently: whitespace, punctuation, numbers, or
    /// words in a script the active language cannot check.
    Skippable,
}

/// A word iterator configured for one language and one segmentation mode.
///
/// The scan table is built once and reused for every text this iterator
/// scans; it is only rebuilt when the engine changes language.
#[derive(Clone, Debug)]
pub struct WordIterator {
    rules: ScanRules,
}

impl WordIterator {
    /// Build an iterator for the attribute table's language.
    ///
    /// Fails when no scan table can be built for the language; the engine
    /// turns that failure into its fail-open path.
    pub fn new(attributes: &CharacterAttributes, mode: SegmentationMode) -> Result<WordIterator> {
        Ok(WordIterator {
            rules: attributes.scan_rules(mode)?,
        })
    }

    /// The scan table this iterator consults.
    pub fn rules(&self) -> &ScanRules {
        &self.rules
    }

    /// Start a fresh forward-only pass over `text`.
    ///
    /// The cursor borrows `text`; its produced offsets are valid only for
    /// that buffer. Rescanning requires a new cursor.
    pub fn segment<'a, 't>(&'a self, text: &'t str) -> SegmentCursor<'a, 't> {
        SegmentCursor {
            rules: &self.rules,
            text,
            bounds: text.split_word_bound_indices(),
            lookahead: VecDeque::new(),
            pending: VecDeque::new(),
        }
    }

    /// Drain a full pass over `token`, collecting every candidate word in
    /// scan order.
    pub fn collect_words(&self, token: &str) -> Vec<String> {
        self.segment(token)
            .filter_map(|status| match status {
                SegmentStatus::Word { text, .. } => Some(text.to_string()),
                SegmentStatus::Skippable => None,
            })
            .collect()
    }
}

/// One lazy pass over a buffer.
///
/// `next()` returning `None` is end of text; the cursor cannot be restarted.
pub struct SegmentCursor<'a, 't> {
    rules: &'a ScanRules,
    text: &'t str,
    bounds: UWordBoundIndices<'t>,
    /// Boundary segments read ahead of the scan position for hyphen joining.
    lookahead: VecDeque<(usize, &'t str)>,
    /// Sub-word runs of the current token, queued in strict mode.
    pending: VecDeque<(usize, &'t str)>,
}

impl<'t> SegmentCursor<'_, 't> {
    fn next_bound(&mut self) -> Option<(usize, &'t str)> {
        self.lookahead.pop_front().or_else(|| self.bounds.next())
    }

    fn fill_lookahead(&mut self, depth: usize) {
        while self.lookahead.len() < depth {
            match self.bounds.next() {
                Some(bound) => self.lookahead.push_back(bound),
                None => break,
            }
        }
    }

    /// Extend a word across joiner characters ("mother-in-law" stays whole).
    fn join_words(&mut self, start: usize, segment: &'t str) -> (usize, usize) {
        let mut end = start + segment.len();
        loop {
            self.fill_lookahead(2);
            match (
                self.lookahead.front().copied(),
                self.lookahead.get(1).copied(),
            ) {
                (Some((_, joiner)), Some((next_start, next)))
                    if self.rules.joins_words(joiner) && self.rules.is_checkable_word(next) =>
                {
                    self.lookahead.pop_front();
                    self.lookahead.pop_front();
                    end = next_start + next.len();
                }
                _ => break,
            }
        }
        (start, end)
    }

    /// Queue the word-character runs of one boundary segment.
    fn queue_word_runs(&mut self, base: usize, segment: &'t str) {
        let mut run_start: Option<usize> = None;
        for (i, c) in segment.char_indices() {
            if self.rules.is_word_char(c) {
                if run_start.is_none() {
                    run_start = Some(i);
                }
            } else if let Some(s) = run_start.take() {
                self.pending.push_back((base + s, &segment[s..i]));
            }
        }
        if let Some(s) = run_start {
            self.pending.push_back((base + s, &segment[s..]));
        }
    }
}

impl<'t> Iterator for SegmentCursor<'_, 't> {
    type Item = SegmentStatus<'t>;

    fn next(&mut self) -> Option<SegmentStatus<'t>> {
        if let Some((start, part)) = self.pending.pop_front() {
            return Some(SegmentStatus::Word {
                text: part,
                start,
                length: part.len(),
            });
        }

        let (start, segment) = self.next_bound()?;
        if !self.rules.is_checkable_word(segment) {
            return Some(SegmentStatus::Skippable);
        }

        match self.rules.mode() {
            SegmentationMode::KeepContractions => {
                let (start, end) = self.join_words(start, segment);
                Some(SegmentStatus::Word {
                    text: &self.text[start..end],
                    start,
                    length: end - start,
                })
            }
            SegmentationMode::SplitContractions => {
                self.queue_word_runs(start, segment);
                match self.pending.pop_front() {
                    Some((run_start, part)) => Some(SegmentStatus::Word {
                        text: part,
                        start: run_start,
                        length: part.len(),
                    }),
                    None => Some(SegmentStatus::Skippable),
                }
            }
        }
    }
}
