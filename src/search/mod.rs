//! Matching engine for resolving misspelled queries to catalog entries.

pub mod engine;
pub mod selector;

pub use self::engine::{RecipeMatcher, match_recipe};
pub use self::selector::{BestMatches, MatchResult};

/// Configuration for match operations.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Score catalog entries on the rayon pool instead of sequentially.
    pub parallel: bool,
    /// Minimum number of (entry, candidate) pairings before the parallel
    /// path engages; smaller workloads run sequentially either way.
    pub parallel_threshold: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            parallel: false,
            parallel_threshold: 100,
        }
    }
}
