//! Text analysis module for Ladle.
//!
//! This module provides the text handling that precedes matching: splitting
//! phrases into words and deriving the catalog vocabulary.

pub mod tokenizer;
pub mod vocabulary;

// Re-export commonly used types
pub use tokenizer::*;
pub use vocabulary::*;
