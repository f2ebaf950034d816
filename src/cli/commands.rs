use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;

use crate::indexer::{TranslationIndex, load_index};
use crate::models::{DatasetEntry, TranslationResult};
use crate::search::search_entries;
use crate::segmenter::classify::{
    COMBINING_KEYCAP, ZERO_WIDTH_JOINER, is_regional_indicator, is_skin_tone_modifier, is_tag,
};
use crate::service::TranslationService;
use crate::utils::{format_path_with_tilde, init_logging, resolve_dataset_path};
use crate::verify::{Summary, load_fixture_file, round_trip_suites, run_suite};

// Failures listed individually by `verify` before summarising the rest
const MAX_LISTED_FAILURES: usize = 20;

#[derive(Parser)]
#[command(name = "emoji-translator")]
#[command(version = "0.1.0")]
#[command(about = "Translate between emoji and plain-language descriptions", long_about = None)]
pub struct Cli {
    /// Dataset file (default: $EMOJI_TRANSLATOR_DATASET, then the platform data directory)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace emoji in TEXT with their descriptions
    ToText { text: String },
    /// Look up the emoji for an exact description
    ToEmoji { phrase: String },
    /// Answer JSON requests ({"text": ...} or {"phrase": ...}) read line by line from stdin
    Batch,
    /// Fuzzy-search emoji descriptions
    Search {
        query: String,
        /// Maximum number of results
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Show statistics about the dataset
    Stats,
    /// Check dataset round-trips and run optional fixture files
    Verify { fixtures: Vec<PathBuf> },
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(ExitCode::SUCCESS);
    };

    let dataset = resolve_dataset_path(cli.dataset.as_deref())?;

    match command {
        Commands::ToText { text } => {
            let service = TranslationService::load(&dataset);
            Ok(print_result(service.convert_to_text(text.as_str())))
        }
        Commands::ToEmoji { phrase } => {
            let service = TranslationService::load(&dataset);
            Ok(print_result(service.convert_to_emojis(phrase.as_str())))
        }
        Commands::Batch => {
            run_batch(&TranslationService::load(&dataset))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Search { query, limit } => {
            show_search(&load_required(&dataset)?, query, *limit);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Stats => {
            show_stats(&load_required(&dataset)?, &dataset);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Verify { fixtures } => run_verify(load_required(&dataset)?, fixtures),
    }
}

fn load_required(path: &Path) -> Result<TranslationIndex> {
    load_index(path).with_context(|| format!("Failed to load dataset: {}", path.display()))
}

fn print_result(result: Option<TranslationResult>) -> ExitCode {
    match result.map(TranslationResult::into_result) {
        Some(Ok(text)) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Some(Err(error)) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}

/// Requests are answered in parallel; responses keep input order
fn run_batch(service: &TranslationService) -> Result<()> {
    let lines = io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context("Failed to read requests from stdin")?;

    let responses: Vec<TranslationResult> = lines
        .par_iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| service.handle_line(line))
        .collect();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for response in &responses {
        serde_json::to_writer(&mut out, response).context("Failed to serialize response")?;
        out.write_all(b"\n").context("Failed to write response")?;
    }
    out.flush().context("Failed to flush responses")?;

    Ok(())
}

fn show_search(index: &TranslationIndex, query: &str, limit: usize) {
    let hits = search_entries(index, query, limit);
    if hits.is_empty() {
        println!("No matches for '{}'", query);
        return;
    }

    for entry in hits {
        println!("{}  {}", entry.emoji, entry.translation);
    }
}

fn show_stats(index: &TranslationIndex, dataset: &Path) {
    let entries = index.entries();
    let aliases: usize = entries.iter().map(|e| e.aliases.len()).sum();
    let zwj = count_containing(entries, |c| c == ZERO_WIDTH_JOINER);
    let skin_tone = count_containing(entries, is_skin_tone_modifier);
    let flags = count_containing(entries, |c| is_regional_indicator(c) || is_tag(c));
    let keycaps = count_containing(entries, |c| c == COMBINING_KEYCAP);

    println!("Emoji Dataset Statistics");
    println!("========================");
    println!("Total entries: {}", index.len());
    println!("  ZWJ sequences: {}", zwj);
    println!("  Skin-tone variants: {}", skin_tone);
    println!("  Flags: {}", flags);
    println!("  Keycaps: {}", keycaps);
    println!("Aliases: {}", aliases);
    println!("Indexed phrases: {}", index.text_index().len());
    println!();
    println!("Dataset: {}", format_path_with_tilde(dataset));
}

/// Number of entries whose emoji contains a char matching `pred`
fn count_containing(entries: &[DatasetEntry], pred: impl Fn(char) -> bool) -> usize {
    entries.iter().filter(|entry| entry.emoji.chars().any(&pred)).count()
}

fn run_verify(index: TranslationIndex, fixture_paths: &[PathBuf]) -> Result<ExitCode> {
    let mut suites = round_trip_suites(&index).to_vec();
    for path in fixture_paths {
        suites.push(load_fixture_file(path)?);
    }

    let service = TranslationService::new(index);
    let mut summary = Summary::new();
    for suite in &suites {
        let before = summary.total();
        summary = run_suite(&service, suite, summary);
        println!("{}: {} cases", suite.name, summary.total() - before);
    }

    for failure in summary.failures.iter().take(MAX_LISTED_FAILURES) {
        println!(
            "FAIL [{}] {}: expected {:?}, got {:?}",
            failure.suite, failure.case, failure.expected, failure.actual
        );
    }
    if summary.failures.len() > MAX_LISTED_FAILURES {
        println!("... and {} more failures", summary.failures.len() - MAX_LISTED_FAILURES);
    }

    println!();
    println!("Passed: {}", summary.passed);
    println!("Failed: {}", summary.failed);

    Ok(if summary.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
