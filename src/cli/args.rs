//! Command line argument parsing for the Ladle CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ladle - a spelling-tolerant recipe name matcher
#[derive(Parser, Debug, Clone)]
#[command(name = "ladle")]
#[command(about = "Match misspelled recipe names against a catalog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct LadleArgs {
    /// Increase output verbosity (repeatable: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress everything except errors (overrides --verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

impl LadleArgs {
    /// Effective verbosity: 0 when quiet, otherwise at least 1.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            return 0;
        }
        self.verbose.max(1)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Match a query against the catalog
    Match(MatchArgs),

    /// Read queries interactively and match each one
    Prompt(PromptArgs),

    /// Show the vocabulary derived from the catalog
    Vocab(VocabArgs),
}

/// Arguments for one-shot matching
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Catalog file (JSON array of recipe records); uses the built-in
    /// sample catalog when omitted
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,

    /// Score catalog entries in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the interactive prompt
#[derive(Parser, Debug, Clone)]
pub struct PromptArgs {
    /// Catalog file (JSON array of recipe records); uses the built-in
    /// sample catalog when omitted
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,
}

/// Arguments for vocabulary inspection
#[derive(Parser, Debug, Clone)]
pub struct VocabArgs {
    /// Catalog file (JSON array of recipe records); uses the built-in
    /// sample catalog when omitted
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub catalog: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
