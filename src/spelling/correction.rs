//! Per-word spelling correction against a catalog vocabulary.
//!
//! Each query word is corrected independently. A word already in the
//! vocabulary stands alone; otherwise every vocabulary word at the minimal
//! Levenshtein distance is kept as a candidate. Ties are deliberate here
//! and get resolved later, after scoring.

use crate::analysis::tokenizer::split_words;
use crate::analysis::vocabulary::Vocabulary;
use crate::spelling::levenshtein::LevenshteinMatcher;

/// One correction candidate for a single word position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A vocabulary word at minimal edit distance from the query word.
    Word(String),
    /// No vocabulary word existed to correct against.
    Unknown,
}

impl Candidate {
    /// The candidate word, if any.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Candidate::Word(word) => Some(word),
            Candidate::Unknown => None,
        }
    }
}

/// Correction candidates for every word position of a query phrase.
///
/// Position `i` corresponds to the `i`-th word of the query. Every position
/// holds at least one candidate, and tied candidates appear in vocabulary
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionTable {
    positions: Vec<Vec<Candidate>>,
}

impl CorrectionTable {
    /// The candidate lists, one per query word position.
    pub fn positions(&self) -> &[Vec<Candidate>] {
        &self.positions
    }

    /// Number of word positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check whether the query had no words at all.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Build the correction table for a query phrase.
pub fn correct_phrase(query: &str, vocabulary: &Vocabulary) -> CorrectionTable {
    let positions = split_words(query)
        .into_iter()
        .map(|word| correct_word(word, vocabulary))
        .collect();

    CorrectionTable { positions }
}

/// Candidates for one query word: the word itself on an exact vocabulary hit,
/// otherwise every vocabulary word at minimal edit distance.
fn correct_word(word: &str, vocabulary: &Vocabulary) -> Vec<Candidate> {
    if vocabulary.contains(word) {
        return vec![Candidate::Word(word.to_string())];
    }

    let matcher = LevenshteinMatcher::new(word.to_string());
    let mut lowest: Option<usize> = None;
    let mut candidates = Vec::new();

    for term in vocabulary.terms() {
        match lowest {
            None => {
                lowest = Some(matcher.distance(term));
                candidates.push(Candidate::Word(term.clone()));
            }
            Some(best) => match matcher.distance_threshold(term, best) {
                Some(distance) if distance < best => {
                    lowest = Some(distance);
                    candidates.clear();
                    candidates.push(Candidate::Word(term.clone()));
                }
                Some(_) => {
                    // Exactly at the running minimum; keep the tie.
                    candidates.push(Candidate::Word(term.clone()));
                }
                None => {}
            },
        }
    }

    if candidates.is_empty() {
        candidates.push(Candidate::Unknown);
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_phrases(&[
            "spicy korean fried chicken",
            "soy garlic korean fried chicken",
            "minestrone soup",
            "cauliflower soup",
        ])
    }

    fn words(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().filter_map(Candidate::as_word).collect()
    }

    #[test]
    fn test_exact_word_is_singleton() {
        let table = correct_phrase("korean soup", &vocabulary());

        assert_eq!(table.len(), 2);
        assert_eq!(words(&table.positions()[0]), vec!["korean"]);
        assert_eq!(words(&table.positions()[1]), vec!["soup"]);
    }

    #[test]
    fn test_unique_minimum() {
        // "munerone" is distance 3 from "minestrone" and further from all else.
        let table = correct_phrase("munerone", &vocabulary());
        assert_eq!(words(&table.positions()[0]), vec!["minestrone"]);
    }

    #[test]
    fn test_tied_minimum_keeps_vocabulary_order() {
        // "sop" is distance 1 from both "soy" and "soup"; "soy" enters the
        // vocabulary first.
        let table = correct_phrase("sop", &vocabulary());
        assert_eq!(words(&table.positions()[0]), vec!["soy", "soup"]);
    }

    #[test]
    fn test_each_position_corrected_independently() {
        let table = correct_phrase("corean fred chickee", &vocabulary());

        assert_eq!(table.len(), 3);
        assert_eq!(words(&table.positions()[0]), vec!["korean"]);
        assert_eq!(words(&table.positions()[1]), vec!["fried"]);
        assert_eq!(words(&table.positions()[2]), vec!["chicken"]);
    }

    #[test]
    fn test_empty_vocabulary_yields_unknown() {
        let empty = Vocabulary::new();
        let table = correct_phrase("soup", &empty);

        assert_eq!(table.len(), 1);
        assert_eq!(table.positions()[0], vec![Candidate::Unknown]);
    }

    #[test]
    fn test_empty_query_yields_empty_table() {
        let table = correct_phrase("", &vocabulary());
        assert!(table.is_empty());
    }
}
