//! Levenshtein distance calculation for spelling correction.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions,
/// or substitutions) required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let chars1: Vec<char> = s1.chars().collect();
    let chars2: Vec<char> = s2.chars().collect();

    if chars1.is_empty() {
        return chars2.len();
    }
    if chars2.is_empty() {
        return chars1.len();
    }

    // Two rows are enough; only the previous row is ever read back.
    let mut prev_row: Vec<usize> = (0..=chars2.len()).collect();
    let mut curr_row = vec![0; chars2.len() + 1];

    for (i, &ch1) in chars1.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &ch2) in chars2.iter().enumerate() {
            let cost = usize::from(ch1 != ch2);

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[chars2.len()]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns `None` as soon as no alignment can stay at or below the threshold.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let chars1: Vec<char> = s1.chars().collect();
    let chars2: Vec<char> = s2.chars().collect();

    // The distance is at least the length difference.
    if chars1.len().abs_diff(chars2.len()) > threshold {
        return None;
    }

    if chars1.is_empty() {
        return Some(chars2.len());
    }
    if chars2.is_empty() {
        return Some(chars1.len());
    }

    let mut prev_row: Vec<usize> = (0..=chars2.len()).collect();
    let mut curr_row = vec![0; chars2.len() + 1];

    for (i, &ch1) in chars1.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, &ch2) in chars2.iter().enumerate() {
            let cost = usize::from(ch1 != ch2);

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // No cell in later rows can drop below the row minimum.
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[chars2.len()];
    if distance <= threshold { Some(distance) } else { None }
}

/// Matcher holding one query word for comparison against many vocabulary words.
pub struct LevenshteinMatcher {
    query: String,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query word.
    pub fn new(query: String) -> Self {
        LevenshteinMatcher { query }
    }

    /// Get the query word.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Calculate distance to a candidate word.
    pub fn distance(&self, candidate: &str) -> usize {
        levenshtein_distance(&self.query, candidate)
    }

    /// Calculate distance with threshold for early termination.
    pub fn distance_threshold(&self, candidate: &str, threshold: usize) -> Option<usize> {
        levenshtein_distance_threshold(&self.query, candidate, threshold)
    }
}
