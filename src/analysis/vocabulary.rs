//! Vocabulary construction from a recipe catalog.
//!
//! The vocabulary is the ordered set of unique words across all catalog
//! entries. Spelling correction searches it and bag-of-words vectors are
//! indexed by it, so both sides of a comparison must be built against the
//! same instance.

use ahash::AHashSet;

use crate::analysis::tokenizer::split_words;

/// The unique words of a catalog, in first-appearance order.
///
/// Word `i` of the vocabulary owns bit `i` of every vector built against it.
/// The order follows the catalog (entry by entry, left to right within each
/// entry), which keeps vector layouts reproducible for a given catalog.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    seen: AHashSet<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Vocabulary {
            terms: Vec::new(),
            seen: AHashSet::new(),
        }
    }

    /// Build a vocabulary from catalog phrases.
    pub fn from_phrases<S: AsRef<str>>(phrases: &[S]) -> Self {
        let mut vocabulary = Vocabulary::new();
        for phrase in phrases {
            for word in split_words(phrase.as_ref()) {
                vocabulary.insert(word);
            }
        }
        vocabulary
    }

    fn insert(&mut self, word: &str) {
        if self.seen.insert(word.to_string()) {
            self.terms.push(word.to_string());
        }
    }

    /// Check whether a word appears verbatim in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    /// The vocabulary words in insertion order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}
