//! Per-language character classification for word segmentation.
//!
//! [`CharacterAttributes`] carries the active language tag and builds
//! [`ScanRules`], the classification table a [`WordIterator`] consults while
//! scanning. One rule implementation serves both scan flavors, parameterized
//! by [`SegmentationMode`], so the lenient and strict passes can never drift
//! apart on shared punctuation classes.
//!
//! [`WordIterator`]: crate::analysis::word_iterator::WordIterator
//!
//! # Examples
//!
//! ```
//! use wordsieve::analysis::{CharacterAttributes, SegmentationMode};
//!
//! let mut attributes = CharacterAttributes::new();
//! attributes.set_default_language("en-US");
//!
//! let rules = attributes.scan_rules(SegmentationMode::KeepContractions).unwrap();
//! assert!(rules.is_word_char('a'));
//! assert!(!rules.is_word_char(':'));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordsieveError};

/// Characters that join two words into one token in the lenient scan.
///
/// Medial apostrophes, colons, and periods are already kept inside words by
/// the Unicode word boundary rules; hyphens are not, so they are joined here.
const MEDIAL_JOINERS: &[char] = &['-', '\u{2010}', '\u{2011}'];

/// Strictness flag for a scan table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentationMode {
    /// Keep apostrophe/colon/hyphen-joined tokens whole. Used for the primary
    /// text scan, so "in'n'out" reaches the dictionary as one candidate.
    KeepContractions,
    /// Additionally split every token at internal non-word characters. Used to
    /// decompose a single token into its constituent sub-words.
    SplitContractions,
}

/// Writing systems the scanner can segment.
///
/// Scripts that need dictionary-based segmentation (CJK, Thai, Lao, ...) are
/// deliberately absent: building scan rules for such a language fails, and
/// the engine reports its text as correctly spelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    /// Latin letters, including the extended ranges (e.g. "café", "naïve").
    Latin,
    /// Cyrillic letters.
    Cyrillic,
    /// Greek letters.
    Greek,
    /// Hebrew letters, plus geresh and gershayim as word characters.
    Hebrew,
    /// Arabic letters.
    Arabic,
}

impl Script {
    /// Map a primary language subtag to its script.
    ///
    /// Returns `None` for languages whose script the scanner cannot segment.
    /// Unrecognized subtags fall back to Latin.
    fn for_subtag(subtag: &str) -> Option<Script> {
        match subtag {
            "be" | "bg" | "kk" | "ky" | "mk" | "mn" | "ru" | "sr" | "tg" | "uk" => {
                Some(Script::Cyrillic)
            }
            "el" => Some(Script::Greek),
            "he" | "iw" | "yi" => Some(Script::Hebrew),
            "ar" | "fa" | "ps" | "ur" => Some(Script::Arabic),
            // Dictionary-segmented scripts have no scan rules.
            "ja" | "km" | "ko" | "lo" | "my" | "th" | "yue" | "zh" => None,
            _ => Some(Script::Latin),
        }
    }

    /// Classify a character into one of the scannable scripts.
    fn of(c: char) -> Option<Script> {
        match c {
            'A'..='Z'
            | 'a'..='z'
            | '\u{00C0}'..='\u{00D6}'
            | '\u{00D8}'..='\u{00F6}'
            | '\u{00F8}'..='\u{024F}'
            | '\u{1E00}'..='\u{1EFF}' => Some(Script::Latin),
            '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}' => Some(Script::Greek),
            '\u{0400}'..='\u{052F}' => Some(Script::Cyrillic),
            '\u{0590}'..='\u{05FF}' => Some(Script::Hebrew),
            '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' => Some(Script::Arabic),
            _ => None,
        }
    }

    /// Non-letter characters the script still spells words with.
    fn extra_word_chars(self) -> &'static [char] {
        match self {
            // Geresh and gershayim, used in Hebrew acronyms and loan words.
            Script::Hebrew => &['\u{05F3}', '\u{05F4}'],
            _ => &[],
        }
    }
}

/// The active language of a segmentation engine.
///
/// Holds the raw language tag; interpretation is deferred to
/// [`scan_rules`](CharacterAttributes::scan_rules), so setting an unusable
/// tag never fails up front.
#[derive(Clone, Debug, Default)]
pub struct CharacterAttributes {
    language: String,
}

impl CharacterAttributes {
    /// Create an attribute table with no language set.
    pub fn new() -> Self {
        CharacterAttributes {
            language: String::new(),
        }
    }

    /// Set the language the attribute table describes (e.g. "en-US").
    pub fn set_default_language(&mut self, language: &str) {
        self.language = language.to_string();
    }

    /// The active language tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Build the scan table for the active language.
    ///
    /// Fails when the tag has no usable primary subtag, or when the language
    /// is written in a script the scanner cannot segment.
    pub fn scan_rules(&self, mode: SegmentationMode) -> Result<ScanRules> {
        let subtag = primary_subtag(&self.language)
            .ok_or_else(|| WordsieveError::InvalidLanguageTag(self.language.clone()))?;
        let script = Script::for_subtag(&subtag)
            .ok_or_else(|| WordsieveError::UnsupportedScript(self.language.clone()))?;
        Ok(ScanRules { script, mode })
    }
}

/// Extract the lowercased primary subtag from a BCP-47-style tag.
fn primary_subtag(tag: &str) -> Option<String> {
    let primary = tag.split(['-', '_']).next().unwrap_or_default();
    if (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(primary.to_ascii_lowercase())
    } else {
        None
    }
}

/// A built scan table: one script's word characters plus a strictness mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanRules {
    script: Script,
    mode: SegmentationMode,
}

impl ScanRules {
    /// The strictness mode this table was built for.
    pub fn mode(&self) -> SegmentationMode {
        self.mode
    }

    /// The script this table accepts.
    pub fn script(&self) -> Script {
        self.script
    }

    /// Whether `c` can appear inside a word of the active language.
    pub fn is_word_char(&self, c: char) -> bool {
        if c.is_numeric() {
            return true;
        }
        if c.is_alphabetic() {
            return Script::of(c) == Some(self.script);
        }
        self.script.extra_word_chars().contains(&c)
    }

    /// Whether a boundary segment is a spelling candidate.
    ///
    /// A candidate contains at least one letter of the active script and no
    /// letter of any other script. Whitespace, punctuation, numbers, and
    /// out-of-script words are all skippable.
    pub fn is_checkable_word(&self, segment: &str) -> bool {
        let mut has_letter = false;
        for c in segment.chars() {
            if c.is_alphabetic() {
                if Script::of(c) != Some(self.script) {
                    return false;
                }
                has_letter = true;
            }
        }
        has_letter
    }

    /// Whether `segment` glues the words on either side of it into one token.
    ///
    /// Only the lenient scan joins; the strict scan splits at the same
    /// characters it would otherwise tolerate.
    pub fn joins_words(&self, segment: &str) -> bool {
        if self.mode != SegmentationMode::KeepContractions {
            return false;
        }
        let mut chars = segment.chars();
        matches!(
            (chars.next(), chars.next()),
            (Some(c), None) if MEDIAL_JOINERS.contains(&c)
        )
    }
}
