//! Wordle Advisor - CLI
//!
//! Proposes guesses for Wordle (and its greedy Absurdle variant) by ranking
//! every legal guess on the partition it induces over the remaining
//! candidates.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use wordle_advisor::{
    commands::{run_analyze, run_play, run_solve},
    core::Word,
    engine::{EngineConfig, Objective},
    game::Session,
    output::{print_analysis_report, print_simulation},
    wordlists::{load_from_file, subtract},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle/Absurdle advisor driven by candidate-set partitioning",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Objective: wordle (maximize partitions) or absurdle (minimize worst case)
    #[arg(short, long, global = true, default_value = "wordle")]
    objective: String,

    /// Blend partition count against worst case for the first N rounds
    #[arg(long, global = true, default_value_t = 0)]
    heuristic_rounds: u32,

    /// Hard mode: restrict guesses to words consistent with prior feedback
    #[arg(long, global = true)]
    hard: bool,

    /// Pin the first guess to a precomputed opening word
    #[arg(long, global = true)]
    opening: Option<String>,

    /// Seed for the random tie-break (OS entropy when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// File of legal guesses
    #[arg(short, long, global = true, default_value = "dictionary.txt")]
    dictionary: String,

    /// Curated likely-answer file (defaults to the full dictionary)
    #[arg(short, long, global = true)]
    candidates: Option<String>,

    /// File of already-played answers to drop from the candidate seed
    #[arg(long, global = true)]
    exclude: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive advisor (default)
    Play,

    /// Simulate solving a specific hidden word
    Solve {
        /// The hidden word to solve for
        word: String,
    },

    /// Simulate every candidate word and report round statistics
    Analyze {
        /// Limit the number of words analyzed
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_from_file(&cli.dictionary)
        .with_context(|| format!("cannot read dictionary '{}'", cli.dictionary))?;
    if dictionary.is_empty() {
        bail!("dictionary '{}' holds no usable words", cli.dictionary);
    }

    let candidates = load_candidates(&cli, &dictionary)?;
    let config = build_config(&cli, &dictionary)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            // the full dictionary backs up the curated list: hidden words
            // missing from it are still reachable after a fallback switch
            let mut session =
                Session::new(dictionary.clone(), candidates, dictionary, config);
            run_play(&mut session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { word } => {
            let result = run_solve(&dictionary, &candidates, &word, &config)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_simulation(&result);
            Ok(())
        }
        Commands::Analyze { limit } => {
            let report = run_analyze(&dictionary, &candidates, &candidates, &config, limit);
            print_analysis_report(&report);
            Ok(())
        }
    }
}

/// Assemble the candidate seed: the curated list (or the dictionary), minus
/// any already-played answers.
fn load_candidates(cli: &Cli, dictionary: &[Word]) -> Result<Vec<Word>> {
    let mut candidates = match &cli.candidates {
        Some(path) => load_from_file(path)
            .with_context(|| format!("cannot read candidate list '{path}'"))?,
        None => dictionary.to_vec(),
    };

    if let Some(path) = &cli.exclude {
        let played = load_from_file(path)
            .with_context(|| format!("cannot read exclusion list '{path}'"))?;
        candidates = subtract(&candidates, &played);
    }

    if candidates.is_empty() {
        bail!("no candidates remain after exclusions");
    }
    Ok(candidates)
}

fn build_config(cli: &Cli, dictionary: &[Word]) -> Result<EngineConfig> {
    let opening_guess = match &cli.opening {
        Some(text) => {
            let word = Word::new(text.as_str())
                .map_err(|e| anyhow::anyhow!("invalid opening guess: {e}"))?;
            if !dictionary.contains(&word) {
                bail!("opening guess '{word}' is not in the dictionary");
            }
            Some(word)
        }
        None => None,
    };

    Ok(EngineConfig {
        objective: Objective::from_name(&cli.objective),
        heuristic_rounds: cli.heuristic_rounds,
        hard_mode: cli.hard,
        opening_guess,
        seed: cli.seed,
    })
}
