//! Guess selection
//!
//! For every dictionary word, partition the candidate set by the feedback
//! code each candidate would produce, then keep the word whose partition
//! ranks best under the configured objective. Exact ties are resolved by a
//! single reservoir sample so the choice is uniform over all tied words
//! without storing them.

use super::config::EngineConfig;
use super::partition::PartitionStats;
use crate::core::Word;
use rand::Rng;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Select the next guess for the given candidate set.
///
/// The dictionary scan is parallelized; per-word stats are collected in
/// dictionary order and folded sequentially, so the result does not depend on
/// thread count. The caller owns the round counter and the RNG, which makes
/// the selection reproducible under a fixed seed.
///
/// With fewer than three candidates the first candidate is returned outright:
/// a guess can at best confirm one of two possibilities, so the scan cannot
/// improve on it. Candidate lists are drawn from the dictionary universe, so
/// the returned word is always a legal guess.
///
/// # Panics
/// `candidates` must be non-empty; an empty set is a caller bug and panics.
#[must_use]
pub fn select_guess<R: Rng + ?Sized>(
    dictionary: &[Word],
    candidates: &[Word],
    round: u32,
    config: &EngineConfig,
    rng: &mut R,
) -> Word {
    debug_assert!(
        !candidates.is_empty(),
        "select_guess requires a non-empty candidate set"
    );
    debug_assert!(!dictionary.is_empty());

    if round == 1 {
        if let Some(opening) = &config.opening_guess {
            return opening.clone();
        }
    }

    if candidates.len() < 3 {
        return candidates[0].clone();
    }

    let scored: Vec<PartitionStats> = dictionary
        .par_iter()
        .map(|guess| PartitionStats::compute(guess, candidates))
        .collect();

    let use_blend = round <= config.heuristic_rounds;

    let mut best = 0;
    let mut ties = 1u32;
    for i in 1..scored.len() {
        let order = if use_blend {
            scored[i].blend_score().total_cmp(&scored[best].blend_score())
        } else {
            scored[i].rank(&scored[best], config.objective)
        };

        match order {
            Ordering::Greater => {
                best = i;
                ties = 1;
            }
            Ordering::Equal => {
                ties += 1;
                if rng.random::<f64>() * f64::from(ties) < 1.0 {
                    best = i;
                }
            }
            Ordering::Less => {}
        }
    }

    dictionary[best].clone()
}
