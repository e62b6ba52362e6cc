//! Recipe catalog sources for Ladle.
//!
//! A catalog is just a list of lowercase recipe names. This module loads
//! catalogs from JSON record files and ships a small built-in sample.

pub mod builtin;
pub mod loader;

// Re-export commonly used types
pub use builtin::*;
pub use loader::*;
