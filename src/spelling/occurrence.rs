//! Word occurrence records and their accumulation across checks.

use std::collections::hash_map::Entry;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One discovered token in checked text.
///
/// `location` and `length` are byte offset and byte length in the text the
/// token was found in. `misspelled_count` counts how often the same token was
/// seen at the same spot; the caller bumps nothing itself, it only reads the
/// tally after deciding which words the dictionary rejects.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WordOccurrence {
    /// The token text.
    pub text: String,
    /// Byte offset of the token in the checked text.
    pub location: usize,
    /// Byte length of the token.
    pub length: usize,
    /// How many times this (location, text) pair has been recorded.
    pub misspelled_count: u32,
    /// Sub-words of the token when it decomposes under the strict rules;
    /// empty for atomic tokens. When non-empty it holds at least two entries
    /// whose concatenation, minus separators, rebuilds the token.
    pub contraction_words: Vec<String>,
}

impl WordOccurrence {
    /// Create a first-sighting record for a token.
    pub fn new(text: impl Into<String>, location: usize, length: usize) -> Self {
        WordOccurrence {
            text: text.into(),
            location,
            length,
            misspelled_count: 1,
            contraction_words: Vec::new(),
        }
    }
}

/// Occurrences are the same entity when they share offset and text; `length`
/// and the bookkeeping fields do not participate.
impl PartialEq for WordOccurrence {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location && self.text == other.text
    }
}

impl Eq for WordOccurrence {}

/// An insertion-ordered list of [`WordOccurrence`] with constant-time
/// duplicate detection.
///
/// The caller owns the list and may keep it across any number of
/// [`spell_check_text`](crate::spelling::SpellcheckLanguage::spell_check_text)
/// calls: counts accumulate, entries are never dropped or reordered.
#[derive(Clone, Debug, Default)]
pub struct WordOccurrences {
    entries: Vec<WordOccurrence>,
    index: AHashMap<(usize, String), usize>,
}

impl WordOccurrences {
    /// Create an empty occurrence list.
    pub fn new() -> Self {
        WordOccurrences::default()
    }

    /// Append-or-increment under the (offset, text) identity.
    ///
    /// A fresh record is stored as given; a duplicate bumps the stored
    /// record's `misspelled_count` and otherwise leaves it untouched, so the
    /// first sighting's `length` wins, matching occurrence equality.
    pub fn record(&mut self, occurrence: WordOccurrence) -> &mut WordOccurrence {
        let key = (occurrence.location, occurrence.text.clone());
        match self.index.entry(key) {
            Entry::Occupied(slot) => {
                let i = *slot.get();
                self.entries[i].misspelled_count += 1;
                &mut self.entries[i]
            }
            Entry::Vacant(slot) => {
                let i = self.entries.len();
                slot.insert(i);
                self.entries.push(occurrence);
                &mut self.entries[i]
            }
        }
    }

    /// Number of distinct (location, text) entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`, in first-seen order.
    pub fn get(&self, index: usize) -> Option<&WordOccurrence> {
        self.entries.get(index)
    }

    /// Iterate entries in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, WordOccurrence> {
        self.entries.iter()
    }

    /// The entries as a slice, in first-seen order.
    pub fn as_slice(&self) -> &[WordOccurrence] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a WordOccurrences {
    type Item = &'a WordOccurrence;
    type IntoIter = std::slice::Iter<'a, WordOccurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_length_and_counts() {
        let mut a = WordOccurrence::new("cat", 4, 3);
        let mut b = WordOccurrence::new("cat", 4, 7);
        a.misspelled_count = 5;
        b.contraction_words = vec!["c".to_string(), "at".to_string()];
        assert_eq!(a, b);

        assert_ne!(WordOccurrence::new("cat", 0, 3), WordOccurrence::new("cat", 4, 3));
        assert_ne!(WordOccurrence::new("cat", 4, 3), WordOccurrence::new("dog", 4, 3));
    }

    #[test]
    fn test_record_appends_then_increments() {
        let mut occurrences = WordOccurrences::new();
        occurrences.record(WordOccurrence::new("cat", 0, 3));
        occurrences.record(WordOccurrence::new("cat", 4, 3));
        occurrences.record(WordOccurrence::new("cat", 0, 3));

        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences.get(0).map(|o| o.misspelled_count), Some(2));
        assert_eq!(occurrences.get(1).map(|o| o.misspelled_count), Some(1));
    }

    #[test]
    fn test_duplicate_keeps_first_length() {
        let mut occurrences = WordOccurrences::new();
        occurrences.record(WordOccurrence::new("cat", 0, 3));
        occurrences.record(WordOccurrence::new("cat", 0, 9));

        assert_eq!(occurrences.len(), 1);
        let entry = occurrences.get(0).unwrap();
        assert_eq!(entry.length, 3);
        assert_eq!(entry.misspelled_count, 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut occurrences = WordOccurrences::new();
        for (i, word) in ["delta", "alpha", "echo"].iter().enumerate() {
            occurrences.record(WordOccurrence::new(*word, i * 10, word.len()));
        }
        let order: Vec<_> = occurrences.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(order, vec!["delta", "alpha", "echo"]);
    }
}
