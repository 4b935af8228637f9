//! The per-language spell-check segmentation engine.
//!
//! [`SpellcheckLanguage`] drives two differently-configured word iterators:
//! a lenient one that keeps contractions whole for the primary scan, and a
//! strict one that re-segments single tokens to recover concatenations of
//! independently valid words ("in'n'out", "hello:hello"). It extracts
//! spelling candidates; it never judges them. Dictionary lookup belongs to
//! the caller.
//!
//! # Examples
//!
//! ```
//! use wordsieve::spelling::{SpellcheckLanguage, WordOccurrences};
//!
//! let mut language = SpellcheckLanguage::new();
//! language.init("en-US");
//!
//! let mut occurrences = WordOccurrences::new();
//! let words = language.spell_check_text("I'm in'n'out", &mut occurrences);
//!
//! // The contraction is offered both whole and in parts.
//! assert!(words.contains("in'n'out"));
//! assert!(words.contains("out"));
//! ```

use std::collections::HashSet;

use tracing::debug;

use crate::analysis::attributes::{CharacterAttributes, SegmentationMode};
use crate::analysis::word_iterator::{SegmentStatus, WordIterator};
use crate::spelling::occurrence::{WordOccurrence, WordOccurrences};

/// Lazily-initialized word iterator slot.
///
/// `Unavailable` latches a failed build until the next language change, so a
/// broken language logs once instead of on every call.
#[derive(Clone, Debug, Default)]
enum IteratorSlot {
    #[default]
    Uninitialized,
    Ready(WordIterator),
    Unavailable,
}

impl IteratorSlot {
    fn reset(&mut self) {
        *self = IteratorSlot::Uninitialized;
    }

    /// Build the iterator on first use; report whether it is usable.
    fn ensure(&mut self, attributes: &CharacterAttributes, mode: SegmentationMode) -> bool {
        if let IteratorSlot::Uninitialized = self {
            match WordIterator::new(attributes, mode) {
                Ok(iterator) => *self = IteratorSlot::Ready(iterator),
                Err(err) => {
                    debug!(
                        "failed to initialize {:?} word iterator for {:?}: {}",
                        mode,
                        attributes.language(),
                        err
                    );
                    *self = IteratorSlot::Unavailable;
                }
            }
        }
        matches!(self, IteratorSlot::Ready(_))
    }

    fn get(&self) -> Option<&WordIterator> {
        match self {
            IteratorSlot::Ready(iterator) => Some(iterator),
            _ => None,
        }
    }
}

/// One language's word-extraction engine.
///
/// Not safe for concurrent use: both iterator slots and the borrowed
/// occurrence list are mutated during a check, which the `&mut self`
/// receivers encode. Everything runs to completion on the calling thread.
#[derive(Clone, Debug, Default)]
pub struct SpellcheckLanguage {
    attributes: CharacterAttributes,
    text_iterator: IteratorSlot,
    contraction_iterator: IteratorSlot,
}

impl SpellcheckLanguage {
    /// Create an engine with no language configured.
    pub fn new() -> Self {
        SpellcheckLanguage::default()
    }

    /// Configure the engine for `language` (e.g. "en-US").
    ///
    /// Always succeeds from the caller's perspective: an unusable language
    /// only surfaces on first use, when [`spell_check_text`] starts returning
    /// empty sets. Safe to call repeatedly to switch languages; both
    /// iterators are rebuilt lazily after every call.
    ///
    /// [`spell_check_text`]: SpellcheckLanguage::spell_check_text
    pub fn init(&mut self, language: &str) {
        self.attributes.set_default_language(language);
        self.text_iterator.reset();
        self.contraction_iterator.reset();
    }

    /// The active language tag.
    pub fn language(&self) -> &str {
        self.attributes.language()
    }

    /// Extract the spelling candidates of `text`.
    ///
    /// Returns the deduplicated vocabulary of this scan and appends to (or
    /// increments counts in) `occurrences`, which the caller owns and may
    /// carry across calls. When a token is a concatenation of two or more
    /// sub-words, the sub-words join the returned set alongside the whole
    /// token, so a dictionary lookup may accept either form.
    ///
    /// If no scan rules can be built for the active language, the text is
    /// reported as entirely correctly spelled: an empty set, `occurrences`
    /// untouched. Malformed or empty text is never an error.
    pub fn spell_check_text(
        &mut self,
        text: &str,
        occurrences: &mut WordOccurrences,
    ) -> HashSet<String> {
        if !self
            .text_iterator
            .ensure(&self.attributes, SegmentationMode::KeepContractions)
        {
            return HashSet::new();
        }
        if !self
            .contraction_iterator
            .ensure(&self.attributes, SegmentationMode::SplitContractions)
        {
            return HashSet::new();
        }
        let (Some(text_iterator), Some(contraction_iterator)) =
            (self.text_iterator.get(), self.contraction_iterator.get())
        else {
            return HashSet::new();
        };

        let mut words = HashSet::new();
        for status in text_iterator.segment(text) {
            let SegmentStatus::Word {
                text: word,
                start,
                length,
            } = status
            else {
                continue;
            };

            let entry = occurrences.record(WordOccurrence::new(word, start, length));
            words.insert(word.to_string());

            let parts = contraction_iterator.collect_words(word);
            if parts.len() > 1 {
                entry.contraction_words.clone_from(&parts);
                words.extend(parts);
            }
        }
        words
    }

    /// Split a single token under the strict segmentation rules.
    ///
    /// The contraction iterator must already be initialized; any call to
    /// [`spell_check_text`](SpellcheckLanguage::spell_check_text) since the
    /// last [`init`](SpellcheckLanguage::init) does that. Calling this
    /// earlier is a programming error: it panics in debug builds and yields
    /// an empty list in release builds. An iterator that failed to build
    /// yields an empty list, consistent with the fail-open scan.
    pub fn split_contraction(&self, token: &str) -> Vec<String> {
        let iterator = match &self.contraction_iterator {
            IteratorSlot::Ready(iterator) => iterator,
            IteratorSlot::Unavailable => return Vec::new(),
            IteratorSlot::Uninitialized => {
                debug_assert!(false, "contraction iterator used before initialization");
                return Vec::new();
            }
        };
        iterator.collect_words(token)
    }

    /// Whether `token` is a concatenation of two or more sub-words under the
    /// strict segmentation rules.
    ///
    /// A pure segmentation decision: the sub-words are not checked against
    /// any dictionary. Same precondition as
    /// [`split_contraction`](SpellcheckLanguage::split_contraction).
    pub fn is_contraction(&self, token: &str) -> bool {
        self.split_contraction(token).len() > 1
    }

    /// Whether this language instance participates in checking.
    pub fn is_enabled(&self) -> bool {
        true
    }
}
