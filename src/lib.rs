//! # Ladle
//!
//! A spelling-tolerant recipe name matcher for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Per-word Levenshtein correction against the catalog vocabulary
//! - Exhaustive expansion of tied corrections
//! - Binary bag-of-words cosine scoring
//! - Deterministic tie handling with alphabetically ordered output
//!
//! ## Example
//!
//! ```
//! use ladle::prelude::*;
//!
//! let catalog = vec![
//!     "spicy korean fried chicken".to_string(),
//!     "minestrone soup".to_string(),
//! ];
//!
//! let matcher = RecipeMatcher::new(catalog)?;
//! let result = matcher.matches("corean fred chickee")?;
//! assert_eq!(result.render(), "spicy korean fried chicken");
//! # Ok::<(), LadleError>(())
//! ```

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod scoring;
pub mod search;
pub mod spelling;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::catalog::{load_catalog, parse_catalog, sample_recipes};
    pub use crate::error::{LadleError, Result};
    pub use crate::search::{MatchResult, MatcherConfig, RecipeMatcher, match_recipe};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
