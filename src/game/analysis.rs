//! Self-play simulation and batch analysis
//!
//! Replaces the human at the prompt with the scorer: feedback is computed
//! against a known hidden word, which turns the interactive loop into a
//! benchmark of the selection policy.

use super::session::{GameState, Session};
use crate::core::{Feedback, Word};
use crate::engine::EngineConfig;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Outcome of simulating one hidden word
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// The hidden word played against
    pub hidden: Word,
    /// Rounds played, counting the solving guess
    pub rounds: u32,
    /// Guesses made with the feedback each received
    pub trace: Vec<(Word, Feedback)>,
    /// Whether the hidden word was confirmed
    pub solved: bool,
}

/// Aggregate statistics over a reference set
#[derive(Debug)]
pub struct AnalysisReport {
    /// Number of games simulated
    pub games: usize,
    /// Games that ended in `Solved`
    pub solved: usize,
    /// Sum of rounds over solved games
    pub total_rounds: u64,
    /// Mean rounds per solved game
    pub mean_rounds: f64,
    /// Solved games per round count
    pub distribution: HashMap<u32, usize>,
    /// Longest solved game
    pub max_rounds: u32,
    /// Wall-clock time for the whole run
    pub duration: Duration,
}

/// Play one full game against `hidden`, with feedback computed by the scorer.
///
/// Termination relies on the reference set being drawn from the dictionary:
/// some guess then always splits the remaining candidates, so the session
/// reaches `Solved` (hidden word in the candidate seed) or `Exhausted`.
#[must_use]
pub fn simulate(
    dictionary: &[Word],
    candidates: &[Word],
    hidden: &Word,
    config: &EngineConfig,
) -> SimulationResult {
    let mut session = Session::new(
        dictionary.to_vec(),
        candidates.to_vec(),
        Vec::new(),
        config.clone(),
    );
    let mut trace = Vec::new();

    while matches!(session.state(), GameState::AwaitingGuess) {
        let guess = session.propose();
        let feedback = Feedback::score(&guess, hidden);
        trace.push((guess, feedback));
        session.observe(feedback);
    }

    let (solved, rounds) = match session.state() {
        GameState::Solved { rounds, .. } => (true, *rounds),
        _ => (false, trace.len() as u32),
    };

    SimulationResult {
        hidden: hidden.clone(),
        rounds,
        trace,
        solved,
    }
}

/// Simulate every word in `reference` and aggregate round counts.
///
/// `on_game` is invoked once per finished game, in order; the analyze command
/// uses it to advance its progress bar.
pub fn run_analysis(
    dictionary: &[Word],
    candidates: &[Word],
    reference: &[Word],
    config: &EngineConfig,
    mut on_game: impl FnMut(&SimulationResult),
) -> AnalysisReport {
    let start = Instant::now();

    let mut solved = 0;
    let mut total_rounds = 0u64;
    let mut max_rounds = 0;
    let mut distribution: HashMap<u32, usize> = HashMap::new();

    for hidden in reference {
        let result = simulate(dictionary, candidates, hidden, config);
        if result.solved {
            solved += 1;
            total_rounds += u64::from(result.rounds);
            max_rounds = max_rounds.max(result.rounds);
            *distribution.entry(result.rounds).or_insert(0) += 1;
        }
        on_game(&result);
    }

    let mean_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };

    AnalysisReport {
        games: reference.len(),
        solved,
        total_rounds,
        mean_rounds,
        distribution,
        max_rounds,
        duration: start.elapsed(),
    }
}
