//! Candidate elimination
//!
//! After feedback is observed for a guess, only the words that would have
//! produced exactly that feedback remain possible.

use crate::core::{Feedback, Word};

/// Filter `set` down to the words consistent with `observed` for `guess`.
///
/// Pure and order-preserving; the input is untouched and a fresh vector is
/// returned. An empty result is a legitimate outcome (no known word fits the
/// observed feedback) and is handled by the session's fallback policy.
#[must_use]
pub fn eliminate(set: &[Word], guess: &Word, observed: Feedback) -> Vec<Word> {
    set.iter()
        .filter(|word| Feedback::score(guess, word) == observed)
        .cloned()
        .collect()
}
