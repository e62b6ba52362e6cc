//! Command implementations for Ladle CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::analysis::Vocabulary;
use crate::catalog::{load_catalog, sample_recipes};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::search::{MatcherConfig, RecipeMatcher};

/// Execute a CLI command.
pub fn execute_command(args: LadleArgs) -> Result<()> {
    match &args.command {
        Command::Match(match_args) => run_match(match_args.clone(), &args),
        Command::Prompt(prompt_args) => run_prompt(prompt_args.clone(), &args),
        Command::Vocab(vocab_args) => run_vocab(vocab_args.clone(), &args),
    }
}

/// Load the catalog from a file, or fall back to the built-in sample.
fn load_or_builtin(catalog: &Option<PathBuf>, cli_args: &LadleArgs) -> Result<Vec<String>> {
    match catalog {
        Some(path) => {
            if cli_args.verbosity() > 1 {
                println!("Loading catalog from: {}", path.display());
            }
            load_catalog(path)
        }
        None => {
            if cli_args.verbosity() > 1 {
                println!("Using built-in sample catalog");
            }
            Ok(sample_recipes())
        }
    }
}

/// Match one query and print the result.
fn run_match(args: MatchArgs, cli_args: &LadleArgs) -> Result<()> {
    let catalog = load_or_builtin(&args.catalog, cli_args)?;

    if cli_args.verbosity() > 1 {
        println!("Catalog entries: {}", catalog.len());
        println!("Query: {}", args.query);
    }

    let config = MatcherConfig {
        parallel: args.parallel,
        ..MatcherConfig::default()
    };
    let matcher = RecipeMatcher::with_config(catalog, config)?;

    let query = args.query.to_lowercase();
    let result = matcher.matches(&query)?;
    let report = MatchReport::new(&query, &result);

    output_result(&report.output, &report, cli_args)
}

/// Read queries from stdin and match each one.
fn run_prompt(args: PromptArgs, cli_args: &LadleArgs) -> Result<()> {
    let catalog = load_or_builtin(&args.catalog, cli_args)?;
    let matcher = RecipeMatcher::new(catalog)?;

    if cli_args.verbosity() > 0 {
        println!(
            "Matching against {} recipes (:q to quit)",
            matcher.catalog().len()
        );
    }

    let mut input = String::new();
    loop {
        print!("Search Recipe: ");
        io::stdout().flush()?;

        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        if input.trim() == ":q" {
            break;
        }

        let query = input.trim().to_lowercase();
        let result = matcher.matches(&query)?;
        println!("{}", result.render());
    }

    Ok(())
}

/// Show the vocabulary a catalog produces.
fn run_vocab(args: VocabArgs, cli_args: &LadleArgs) -> Result<()> {
    let catalog = load_or_builtin(&args.catalog, cli_args)?;
    let vocabulary = Vocabulary::from_phrases(&catalog);

    let report = VocabReport {
        catalog_size: catalog.len(),
        words: vocabulary.terms().to_vec(),
    };

    output_result(&report.words.join("\n"), &report, cli_args)
}
