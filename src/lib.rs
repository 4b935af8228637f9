//! # Wordsieve
//!
//! A locale-aware word segmentation and contraction resolution library for
//! spell checking.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Unicode word boundary detection (UAX #29)
//! - Per-language character classification with script filtering
//! - Contraction resolution ("in'n'out", "hello:hello")
//! - Occurrence accounting across repeated checks
//! - Fail-open behavior: an unusable language never blocks checking
//!
//! ## Example
//!
//! ```
//! use wordsieve::spelling::{SpellcheckLanguage, WordOccurrences};
//!
//! let mut language = SpellcheckLanguage::new();
//! language.init("en-US");
//!
//! let mut occurrences = WordOccurrences::new();
//! let words = language.spell_check_text("cat cat dog", &mut occurrences);
//!
//! assert!(words.contains("cat") && words.contains("dog"));
//! assert_eq!(occurrences.len(), 3);
//! ```

pub mod analysis;
pub mod error;
pub mod spelling;

/// Commonly used types.
pub mod prelude {
    pub use crate::analysis::{SegmentStatus, SegmentationMode, WordIterator};
    pub use crate::error::{Result, WordsieveError};
    pub use crate::spelling::{SpellcheckLanguage, WordOccurrence, WordOccurrences};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
