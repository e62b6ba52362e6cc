//! Cartesian expansion of tied spelling corrections.
//!
//! When several vocabulary words tie at the minimal edit distance for a word
//! position, every combination of choices is a plausible reading of the
//! query. This module enumerates all of them lazily so the scorer can rank
//! each reconstruction against the catalog.

use crate::spelling::correction::CorrectionTable;

/// Iterator over every fully corrected reconstruction of a query phrase.
///
/// Yields the Cartesian product of the per-position candidate lists, one
/// phrase per combination, with the rightmost position advancing fastest.
/// A table with no positions yields the empty phrase exactly once.
pub struct CandidatePhrases<'a> {
    table: &'a CorrectionTable,
    cursor: Vec<usize>,
    exhausted: bool,
}

impl<'a> CandidatePhrases<'a> {
    /// Create the phrase iterator for a correction table.
    pub fn new(table: &'a CorrectionTable) -> Self {
        CandidatePhrases {
            table,
            cursor: vec![0; table.len()],
            exhausted: false,
        }
    }

    /// Number of phrases the full product will yield.
    pub fn expected_count(&self) -> usize {
        self.table
            .positions()
            .iter()
            .map(|candidates| candidates.len())
            .product()
    }

    fn assemble(&self) -> String {
        let words: Vec<&str> = self
            .table
            .positions()
            .iter()
            .zip(&self.cursor)
            .filter_map(|(candidates, &index)| candidates[index].as_word())
            .collect();

        words.join(" ")
    }

    fn advance(&mut self) {
        for position in (0..self.cursor.len()).rev() {
            self.cursor[position] += 1;
            if self.cursor[position] < self.table.positions()[position].len() {
                return;
            }
            self.cursor[position] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for CandidatePhrases<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        let phrase = self.assemble();
        self.advance();
        Some(phrase)
    }
}
