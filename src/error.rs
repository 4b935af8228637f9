//! Error types for the wordsieve library.
//!
//! The only fallible step in this crate is building the per-language scan
//! rules; segmentation itself never errors. Rule-building failures are
//! normally swallowed by the engine's fail-open policy (see
//! [`SpellcheckLanguage`](crate::spelling::SpellcheckLanguage)), so these
//! types mostly travel between the attribute and iterator layers.

use thiserror::Error;

/// The main error type for wordsieve operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordsieveError {
    /// The language tag has no usable primary subtag (e.g. `""` or `"1a-US"`).
    #[error("invalid language tag: {0:?}")]
    InvalidLanguageTag(String),

    /// The language is written in a script that needs dictionary-based
    /// segmentation, which this scanner does not do.
    #[error("unsupported script for language: {0:?}")]
    UnsupportedScript(String),
}

/// Result type alias for operations that may fail with [`WordsieveError`].
pub type Result<T> = std::result::Result<T, WordsieveError>;
