//! Binary bag-of-words vectorization over a fixed vocabulary.

use ahash::AHashSet;
use bit_vec::BitVec;

use crate::analysis::tokenizer::split_words;
use crate::analysis::vocabulary::Vocabulary;
use crate::error::{LadleError, Result};

/// A presence/absence vector over one vocabulary instance.
///
/// Bit `i` is set when the phrase contains vocabulary word `i`, regardless of
/// how many times it occurs. Two vectors are only comparable when they were
/// built against the same vocabulary; comparing across vocabularies is a bug
/// and surfaces as an invariant violation.
#[derive(Debug, Clone, PartialEq)]
pub struct BagOfWordsVector {
    bits: BitVec,
}

impl BagOfWordsVector {
    /// Vector dimensionality, equal to the vocabulary size it was built against.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check whether the vector has zero dimensions.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of vocabulary words present in the phrase.
    pub fn weight(&self) -> usize {
        self.bits.iter().filter(|present| *present).count()
    }

    /// Euclidean norm. Zero when the phrase shares no words with the vocabulary.
    ///
    /// For binary vectors this is the square root of the set-bit count, so
    /// equal weights always produce bitwise-identical norms.
    pub fn norm(&self) -> f64 {
        (self.weight() as f64).sqrt()
    }

    /// Dot product with another vector of the same dimensionality.
    ///
    /// For binary vectors this counts the positions set in both, so the
    /// result is an exact integer value.
    pub fn dot(&self, other: &BagOfWordsVector) -> Result<f64> {
        if self.bits.len() != other.bits.len() {
            return Err(LadleError::invariant(format!(
                "bag-of-words vector lengths differ: {} vs {}",
                self.bits.len(),
                other.bits.len()
            )));
        }

        let shared = self
            .bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| *a && *b)
            .count();

        Ok(shared as f64)
    }
}

/// Build the bag-of-words vector for a phrase against a vocabulary.
///
/// Words of the phrase outside the vocabulary set no bits.
pub fn vectorize(phrase: &str, vocabulary: &Vocabulary) -> BagOfWordsVector {
    let words: AHashSet<&str> = split_words(phrase).into_iter().collect();

    let mut bits = BitVec::from_elem(vocabulary.len(), false);
    for (index, term) in vocabulary.terms().iter().enumerate() {
        if words.contains(term.as_str()) {
            bits.set(index, true);
        }
    }

    BagOfWordsVector { bits }
}
