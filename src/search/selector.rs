//! Best-match accumulation with exact-equality tie handling.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The catalog entries tied for the best similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Winning entries in ascending alphabetical order, deduplicated.
    pub entries: Vec<String>,
    /// The winning cosine similarity, absent when nothing scored.
    pub score: Option<f64>,
}

impl MatchResult {
    /// Check whether any entry won.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the result as the output string.
    ///
    /// Winners are joined with `", "`; an empty result renders as `"None"`.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            "None".to_string()
        } else {
            self.entries.join(", ")
        }
    }
}

/// Running accumulator over scored (catalog entry, candidate phrase) pairings.
///
/// A strictly greater score replaces the winner set; an exactly equal score
/// joins it. Scores are quotients of identical integer-derived dot products
/// and norms, so genuine ties compare equal without an epsilon.
#[derive(Debug, Clone, Default)]
pub struct BestMatches {
    score: Option<f64>,
    winners: BTreeSet<String>,
}

impl BestMatches {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        BestMatches::default()
    }

    /// The best score seen so far.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// Record one scored pairing.
    pub fn observe(&mut self, entry: &str, score: f64) {
        match self.score {
            None => {
                self.score = Some(score);
                self.winners.insert(entry.to_string());
            }
            Some(best) if score > best => {
                self.score = Some(score);
                self.winners.clear();
                self.winners.insert(entry.to_string());
            }
            Some(best) if score == best => {
                self.winners.insert(entry.to_string());
            }
            Some(_) => {}
        }
    }

    /// Fold another accumulator in under the same replace-or-join rule.
    pub fn merge(mut self, other: BestMatches) -> BestMatches {
        match (self.score, other.score) {
            (_, None) => self,
            (None, Some(_)) => other,
            (Some(ours), Some(theirs)) => {
                if theirs > ours {
                    other
                } else if theirs == ours {
                    self.winners.extend(other.winners);
                    self
                } else {
                    self
                }
            }
        }
    }

    /// Finish accumulation, producing the ordered result.
    pub fn into_result(self) -> MatchResult {
        MatchResult {
            entries: self.winners.into_iter().collect(),
            score: self.score,
        }
    }
}
