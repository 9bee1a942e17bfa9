//! Candidate partitioning
//!
//! Scoring every candidate against a trial guess partitions the candidate set
//! by feedback code. The selector only needs three scalars of that partition:
//! how many distinct partitions there are, how large the biggest one is, and
//! whether the guess itself is still a viable answer.

use super::config::Objective;
use crate::core::{Feedback, Word, FEEDBACK_COUNT};
use std::cmp::Ordering;

/// Scalars derived from the partition a guess induces on the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionStats {
    /// Number of distinct feedback codes with at least one candidate
    pub classes: u32,
    /// Size of the largest partition (worst-case branch)
    pub worst: u32,
    /// Whether the guess is itself a member of the candidate set
    pub is_member: bool,
}

impl PartitionStats {
    /// Compute the partition scalars for `guess` over `candidates`.
    ///
    /// The histogram is rebuilt from scratch per guess and discarded; only
    /// the scalars survive.
    #[must_use]
    pub fn compute(guess: &Word, candidates: &[Word]) -> Self {
        let mut counts = [0u32; FEEDBACK_COUNT];
        let mut classes = 0;
        let mut worst = 0;

        for candidate in candidates {
            let code = usize::from(Feedback::score(guess, candidate).value());
            counts[code] += 1;
            if counts[code] == 1 {
                classes += 1;
            }
            if counts[code] > worst {
                worst = counts[code];
            }
        }

        Self {
            classes,
            worst,
            is_member: counts[usize::from(Feedback::PERFECT.value())] > 0,
        }
    }

    /// Strict lexicographic ranking under the given objective.
    ///
    /// `Greater` means `self` is the preferred guess. The chain is
    /// classes → worst → membership for `MaximizeClasses` and
    /// worst → classes → membership for `MinimizeWorstCase`; exact ties are
    /// left for the caller's random tie-break.
    #[must_use]
    pub fn rank(&self, other: &Self, objective: Objective) -> Ordering {
        let member = self.is_member.cmp(&other.is_member);
        match objective {
            Objective::MaximizeClasses => self
                .classes
                .cmp(&other.classes)
                .then(other.worst.cmp(&self.worst))
                .then(member),
            Objective::MinimizeWorstCase => other
                .worst
                .cmp(&self.worst)
                .then(self.classes.cmp(&other.classes))
                .then(member),
        }
    }

    /// Blended early-round score: `classes / ln(worst)`.
    ///
    /// A worst case of 1 means the guess resolves the game outright and
    /// short-circuits the blend as the best possible outcome.
    #[must_use]
    pub fn blend_score(&self) -> f64 {
        if self.worst < 2 {
            f64::INFINITY
        } else {
            f64::from(self.classes) / f64::from(self.worst).ln()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| word(s)).collect()
    }

    #[test]
    fn compute_counts_partitions() {
        // abcde splits these into {azzzz}, {zbzzz}, {zzzzz, yyyyy}
        let candidates = words(&["azzzz", "zbzzz", "zzzzz", "yyyyy"]);
        let stats = PartitionStats::compute(&word("abcde"), &candidates);

        assert_eq!(stats.classes, 3);
        assert_eq!(stats.worst, 2);
        assert!(!stats.is_member);
    }

    #[test]
    fn compute_detects_membership() {
        let candidates = words(&["crane", "slate"]);
        assert!(PartitionStats::compute(&word("crane"), &candidates).is_member);
        assert!(!PartitionStats::compute(&word("trace"), &candidates).is_member);
    }

    #[test]
    fn compute_degenerate_partition() {
        // a guess sharing no letters lumps everything into one code
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let stats = PartitionStats::compute(&word("zzzzz"), &candidates);

        assert_eq!(stats.classes, 1);
        assert_eq!(stats.worst, 3);
    }

    #[test]
    fn rank_maximize_classes_chain() {
        let better = PartitionStats {
            classes: 4,
            worst: 3,
            is_member: false,
        };
        let fewer_classes = PartitionStats {
            classes: 3,
            worst: 2,
            is_member: true,
        };
        assert_eq!(
            better.rank(&fewer_classes, Objective::MaximizeClasses),
            Ordering::Greater
        );

        // same classes: the smaller worst case wins
        let tight = PartitionStats {
            classes: 4,
            worst: 2,
            is_member: false,
        };
        assert_eq!(
            tight.rank(&better, Objective::MaximizeClasses),
            Ordering::Greater
        );

        // same classes and worst: membership wins
        let member = PartitionStats {
            classes: 4,
            worst: 2,
            is_member: true,
        };
        assert_eq!(
            member.rank(&tight, Objective::MaximizeClasses),
            Ordering::Greater
        );
        assert_eq!(
            member.rank(&member, Objective::MaximizeClasses),
            Ordering::Equal
        );
    }

    #[test]
    fn rank_minimize_worst_case_chain() {
        let tighter = PartitionStats {
            classes: 3,
            worst: 2,
            is_member: false,
        };
        let looser = PartitionStats {
            classes: 4,
            worst: 3,
            is_member: true,
        };
        assert_eq!(
            tighter.rank(&looser, Objective::MinimizeWorstCase),
            Ordering::Greater
        );

        // same worst: more classes wins
        let wider = PartitionStats {
            classes: 4,
            worst: 2,
            is_member: false,
        };
        assert_eq!(
            wider.rank(&tighter, Objective::MinimizeWorstCase),
            Ordering::Greater
        );
    }

    #[test]
    fn blend_score_guards_small_worst() {
        let resolved = PartitionStats {
            classes: 5,
            worst: 1,
            is_member: true,
        };
        assert_eq!(resolved.blend_score(), f64::INFINITY);

        let split = PartitionStats {
            classes: 6,
            worst: 3,
            is_member: false,
        };
        let expected = 6.0 / 3.0_f64.ln();
        assert!((split.blend_score() - expected).abs() < 1e-12);
    }
}
