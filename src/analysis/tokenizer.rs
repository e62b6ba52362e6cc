//! Word-level splitting for recipe phrases.
//!
//! Catalog entries and queries are plain lowercase phrases, so the only
//! analysis step before vocabulary construction and vectorization is
//! splitting on spaces.

/// Split a phrase into its words.
///
/// Words are separated by spaces. Runs of spaces never produce empty
/// words, so leading and trailing spaces are harmless.
///
/// # Examples
///
/// ```
/// use ladle::analysis::tokenizer::split_words;
///
/// assert_eq!(split_words("minestrone soup"), vec!["minestrone", "soup"]);
/// assert!(split_words("   ").is_empty());
/// ```
pub fn split_words(phrase: &str) -> Vec<&str> {
    phrase.split(' ').filter(|word| !word.is_empty()).collect()
}
