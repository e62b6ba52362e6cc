//! High-level matching engine that combines correction, expansion, and scoring.

use rayon::prelude::*;

use crate::analysis::vocabulary::Vocabulary;
use crate::error::{LadleError, Result};
use crate::scoring::similarity::cosine_similarity;
use crate::scoring::vectorizer::{BagOfWordsVector, vectorize};
use crate::search::MatcherConfig;
use crate::search::selector::{BestMatches, MatchResult};
use crate::spelling::correction::correct_phrase;
use crate::spelling::expansion::CandidatePhrases;

/// Matches misspelled queries against a fixed recipe catalog.
///
/// Each call corrects the query word by word against the catalog vocabulary,
/// expands tied corrections into every candidate phrase, and scores every
/// (catalog entry, candidate phrase) pairing by cosine similarity over binary
/// bag-of-words vectors. The entries tied for the best score win.
#[derive(Debug, Clone)]
pub struct RecipeMatcher {
    catalog: Vec<String>,
    config: MatcherConfig,
}

impl RecipeMatcher {
    /// Create a matcher over a catalog of lowercase recipe names.
    ///
    /// The catalog must be non-empty and free of blank entries.
    pub fn new(catalog: Vec<String>) -> Result<Self> {
        Self::with_config(catalog, MatcherConfig::default())
    }

    /// Create a matcher with explicit configuration.
    pub fn with_config(catalog: Vec<String>, config: MatcherConfig) -> Result<Self> {
        if catalog.is_empty() {
            return Err(LadleError::invalid_argument("catalog must not be empty"));
        }
        if let Some(index) = catalog.iter().position(|entry| entry.trim().is_empty()) {
            return Err(LadleError::invalid_argument(format!(
                "catalog entry {index} is blank"
            )));
        }

        Ok(RecipeMatcher { catalog, config })
    }

    /// The catalog entries this matcher searches.
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Match a query against the catalog.
    ///
    /// A blank query produces an empty result, which renders as `"None"`.
    /// The vocabulary is rebuilt per call, so the matcher itself carries no
    /// state between queries.
    pub fn matches(&self, query: &str) -> Result<MatchResult> {
        if query.trim().is_empty() {
            return Ok(BestMatches::new().into_result());
        }

        let vocabulary = Vocabulary::from_phrases(&self.catalog);
        let table = correct_phrase(query, &vocabulary);
        let candidates: Vec<BagOfWordsVector> = CandidatePhrases::new(&table)
            .map(|phrase| vectorize(&phrase, &vocabulary))
            .collect();

        let pairings = self.catalog.len() * candidates.len();
        let best = if self.config.parallel && pairings >= self.config.parallel_threshold {
            self.score_parallel(&vocabulary, &candidates)?
        } else {
            self.score_sequential(&vocabulary, &candidates)?
        };

        Ok(best.into_result())
    }

    fn score_sequential(
        &self,
        vocabulary: &Vocabulary,
        candidates: &[BagOfWordsVector],
    ) -> Result<BestMatches> {
        let mut best = BestMatches::new();
        for entry in &self.catalog {
            score_entry(entry, vocabulary, candidates, &mut best)?;
        }
        Ok(best)
    }

    /// Score catalog entries on the rayon pool, one partial accumulator per
    /// entry, then merge in catalog order. The merge applies the same
    /// replace-or-join rule as sequential scoring, so results are identical
    /// regardless of scheduling.
    fn score_parallel(
        &self,
        vocabulary: &Vocabulary,
        candidates: &[BagOfWordsVector],
    ) -> Result<BestMatches> {
        let partials: Result<Vec<BestMatches>> = self
            .catalog
            .par_iter()
            .map(|entry| {
                let mut partial = BestMatches::new();
                score_entry(entry, vocabulary, candidates, &mut partial)?;
                Ok(partial)
            })
            .collect();

        Ok(partials?
            .into_iter()
            .fold(BestMatches::new(), BestMatches::merge))
    }
}

/// Score one catalog entry against every candidate phrase.
///
/// Pairings where either side has a zero-norm vector are skipped; they have
/// no defined angle and never become the best match.
fn score_entry(
    entry: &str,
    vocabulary: &Vocabulary,
    candidates: &[BagOfWordsVector],
    best: &mut BestMatches,
) -> Result<()> {
    let entry_vector = vectorize(entry, vocabulary);
    for candidate in candidates {
        if let Some(score) = cosine_similarity(&entry_vector, candidate)? {
            best.observe(entry, score);
        }
    }
    Ok(())
}

/// Match a query against a catalog and render the output string.
///
/// Convenience wrapper over [`RecipeMatcher`] for one-shot lookups.
///
/// # Examples
///
/// ```
/// use ladle::search::match_recipe;
///
/// let catalog = vec![
///     "minestrone soup".to_string(),
///     "cauliflower soup".to_string(),
/// ];
///
/// assert_eq!(match_recipe("munerone sop", &catalog).unwrap(), "minestrone soup");
/// assert_eq!(match_recipe("", &catalog).unwrap(), "None");
/// ```
pub fn match_recipe(query: &str, catalog: &[String]) -> Result<String> {
    let matcher = RecipeMatcher::new(catalog.to_vec())?;
    Ok(matcher.matches(query)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|entry| entry.to_string()).collect()
    }

    fn test_catalog() -> Vec<String> {
        catalog(&[
            "spicy korean fried chicken",
            "soy garlic korean fried chicken",
            "minestrone soup",
            "cauliflower soup",
        ])
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = RecipeMatcher::new(Vec::new());
        assert!(matches!(result, Err(LadleError::InvalidArgument(_))));
    }

    #[test]
    fn test_blank_catalog_entry_rejected() {
        let result = RecipeMatcher::new(catalog(&["minestrone soup", "   "]));
        assert!(matches!(result, Err(LadleError::InvalidArgument(_))));
    }

    #[test]
    fn test_blank_query_is_empty_result() {
        let matcher = RecipeMatcher::new(test_catalog()).unwrap();

        for query in ["", "   ", "\t \n"] {
            let result = matcher.matches(query).unwrap();
            assert!(result.is_empty(), "query {query:?} should match nothing");
            assert_eq!(result.render(), "None");
        }
    }

    #[test]
    fn test_exact_entry_matches_itself() {
        let matcher = RecipeMatcher::new(test_catalog()).unwrap();
        let result = matcher.matches("minestrone soup").unwrap();

        assert_eq!(result.entries, vec!["minestrone soup"]);
        assert_eq!(result.score, Some(1.0));
    }

    #[test]
    fn test_misspelled_words_recovered() {
        let matcher = RecipeMatcher::new(test_catalog()).unwrap();
        let result = matcher.matches("corean fred chickee").unwrap();

        assert_eq!(result.entries, vec!["spicy korean fried chicken"]);
    }

    #[test]
    fn test_dropped_words_still_match() {
        let matcher = RecipeMatcher::new(test_catalog()).unwrap();
        let result = matcher.matches("munerone sop").unwrap();

        assert_eq!(result.entries, vec!["minestrone soup"]);
    }

    #[test]
    fn test_tied_entries_sorted_alphabetically() {
        let matcher = RecipeMatcher::new(test_catalog()).unwrap();
        let result = matcher.matches("soup").unwrap();

        assert_eq!(result.entries, vec!["cauliflower soup", "minestrone soup"]);
        assert_eq!(result.render(), "cauliflower soup, minestrone soup");
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let matcher = RecipeMatcher::new(test_catalog()).unwrap();

        let first = matcher.matches("corean fred chickee").unwrap();
        for _ in 0..5 {
            assert_eq!(matcher.matches("corean fred chickee").unwrap(), first);
        }
    }

    #[test]
    fn test_catalog_order_does_not_change_winners() {
        let mut reversed = test_catalog();
        reversed.reverse();

        let forward = RecipeMatcher::new(test_catalog()).unwrap();
        let backward = RecipeMatcher::new(reversed).unwrap();

        for query in ["soup", "corean fred chickee", "munerone sop"] {
            assert_eq!(
                forward.matches(query).unwrap().entries,
                backward.matches(query).unwrap().entries,
            );
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = RecipeMatcher::new(test_catalog()).unwrap();
        let parallel = RecipeMatcher::with_config(
            test_catalog(),
            MatcherConfig {
                parallel: true,
                parallel_threshold: 1,
            },
        )
        .unwrap();

        for query in ["soup", "corean fred chickee", "munerone sop", "sop"] {
            assert_eq!(
                sequential.matches(query).unwrap(),
                parallel.matches(query).unwrap(),
                "parallel scoring diverged for {query:?}"
            );
        }
    }

    #[test]
    fn test_match_recipe_renders_output() {
        let names = test_catalog();

        assert_eq!(match_recipe("munerone sop", &names).unwrap(), "minestrone soup");
        assert_eq!(match_recipe("", &names).unwrap(), "None");
        assert_eq!(
            match_recipe("soup", &names).unwrap(),
            "cauliflower soup, minestrone soup"
        );
    }
}
