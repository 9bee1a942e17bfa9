//! Engine configuration
//!
//! One engine with an explicit configuration surface replaces the family of
//! near-identical policy variants: the objective, the blended-heuristic
//! window, hard mode, a pinned opening guess and the RNG seed are all plain
//! runtime options.

use crate::core::Word;

/// Partitioning objective used by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Objective {
    /// Wordle policy: maximize the number of distinct feedback partitions,
    /// breaking ties by the smallest worst-case partition.
    #[default]
    MaximizeClasses,
    /// Absurdle policy: minimize the worst-case partition, breaking ties by
    /// the largest number of partitions.
    MinimizeWorstCase,
}

impl Objective {
    /// Create an objective from a name string.
    ///
    /// Accepts "wordle"/"classes" and "absurdle"/"worst-case"; anything else
    /// falls back to the Wordle policy.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "absurdle" | "worst-case" | "minimax" => Self::MinimizeWorstCase,
            _ => Self::MaximizeClasses,
        }
    }
}

/// Configuration for one advisor session
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Partitioning objective
    pub objective: Objective,
    /// Rounds 1..=N use the blended `classes / ln(worst)` score before the
    /// strict comparison chain takes over (0 disables the blend)
    pub heuristic_rounds: u32,
    /// Narrow the guess dictionary itself by every observed feedback
    pub hard_mode: bool,
    /// Pinned round-1 guess, skipping the full dictionary scan
    pub opening_guess: Option<Word>,
    /// RNG seed for the random tie-break; OS entropy when absent
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objective_from_name() {
        assert_eq!(Objective::from_name("wordle"), Objective::MaximizeClasses);
        assert_eq!(Objective::from_name("classes"), Objective::MaximizeClasses);
        assert_eq!(Objective::from_name("absurdle"), Objective::MinimizeWorstCase);
        assert_eq!(
            Objective::from_name("worst-case"),
            Objective::MinimizeWorstCase
        );
        // unknown names fall back to the default policy
        assert_eq!(Objective::from_name("entropy"), Objective::MaximizeClasses);
    }

    #[test]
    fn config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.objective, Objective::MaximizeClasses);
        assert_eq!(config.heuristic_rounds, 0);
        assert!(!config.hard_mode);
        assert!(config.opening_guess.is_none());
        assert!(config.seed.is_none());
    }
}
