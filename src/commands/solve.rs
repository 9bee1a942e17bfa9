//! Solve command
//!
//! Simulates the advisor against a named hidden word, with feedback computed
//! instead of typed in.

use crate::core::Word;
use crate::engine::EngineConfig;
use crate::game::{simulate, SimulationResult};

/// Simulate a full game against `target`.
///
/// # Errors
/// Returns an error if `target` is not a valid five-letter word.
pub fn run_solve(
    dictionary: &[Word],
    candidates: &[Word],
    target: &str,
    config: &EngineConfig,
) -> Result<SimulationResult, String> {
    let hidden = Word::new(target).map_err(|e| format!("invalid target word: {e}"))?;
    Ok(simulate(dictionary, candidates, &hidden, config))
}
