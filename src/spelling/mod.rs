//! Spelling correction for Ladle.
//!
//! This module corrects typos in queries against the catalog vocabulary and
//! expands tied corrections into every plausible reading of the query.

pub mod correction;
pub mod expansion;
pub mod levenshtein;

// Re-export commonly used types
pub use correction::*;
pub use expansion::*;
pub use levenshtein::*;
