//! Text analysis module for wordsieve.
//!
//! This module provides the segmentation machinery: per-language character
//! classification and the word iterators that turn a text buffer into a lazy
//! stream of spelling candidates.

pub mod attributes;
pub mod word_iterator;

// Re-export commonly used types
pub use attributes::{CharacterAttributes, ScanRules, Script, SegmentationMode};
pub use word_iterator::{SegmentCursor, SegmentStatus, WordIterator};
