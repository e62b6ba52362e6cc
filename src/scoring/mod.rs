//! Bag-of-words scoring for Ladle.
//!
//! Catalog entries and corrected queries are embedded as binary word-presence
//! vectors over the catalog vocabulary and compared by cosine similarity.

pub mod similarity;
pub mod vectorizer;

// Re-export commonly used types
pub use similarity::*;
pub use vectorizer::*;
