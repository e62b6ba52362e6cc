//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LadleArgs, OutputFormat};
use crate::error::Result;
use crate::search::MatchResult;

/// Result structure for match operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchReport {
    /// The query after lowercasing.
    pub query: String,
    /// Winning catalog entries in alphabetical order.
    pub matches: Vec<String>,
    /// The winning cosine similarity, if any pairing scored.
    pub score: Option<f64>,
    /// The rendered output line.
    pub output: String,
}

impl MatchReport {
    /// Build a report from a query and its match result.
    pub fn new(query: &str, result: &MatchResult) -> Self {
        MatchReport {
            query: query.to_string(),
            matches: result.entries.clone(),
            score: result.score,
            output: result.render(),
        }
    }
}

/// Result structure for vocabulary inspection.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabReport {
    /// Number of catalog entries the vocabulary was derived from.
    pub catalog_size: usize,
    /// Vocabulary words in first-appearance order.
    pub words: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LadleArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{message}");
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LadleArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
