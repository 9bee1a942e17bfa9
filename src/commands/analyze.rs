//! Analyze command
//!
//! Runs the advisor against every word of a reference set and reports
//! aggregate round statistics.

use crate::core::Word;
use crate::engine::EngineConfig;
use crate::game::{run_analysis, AnalysisReport};
use indicatif::{ProgressBar, ProgressStyle};

/// Simulate every reference word (up to `limit`) with a progress bar.
pub fn run_analyze(
    dictionary: &[Word],
    candidates: &[Word],
    reference: &[Word],
    config: &EngineConfig,
    limit: Option<usize>,
) -> AnalysisReport {
    let reference = &reference[..limit.unwrap_or(reference.len()).min(reference.len())];

    println!("Analyzing {} words...", reference.len());

    let pb = ProgressBar::new(reference.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut total = 0u64;
    let mut games = 0u64;
    let report = run_analysis(dictionary, candidates, reference, config, |result| {
        games += 1;
        total += u64::from(result.rounds);
        pb.set_message(format!("avg {:.2}", total as f64 / games as f64));
        pb.inc(1);
    });
    pb.finish_with_message("done");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn analyzes_whole_reference_set() {
        let pool = words(&["crane", "slate", "trace", "grape", "brave"]);
        let config = EngineConfig {
            seed: Some(9),
            ..EngineConfig::default()
        };

        let report = run_analyze(&pool, &pool, &pool, &config, None);
        assert_eq!(report.games, 5);
        assert_eq!(report.solved, 5);
    }

    #[test]
    fn limit_truncates_reference_set() {
        let pool = words(&["crane", "slate", "trace", "grape", "brave"]);
        let config = EngineConfig {
            seed: Some(9),
            ..EngineConfig::default()
        };

        let report = run_analyze(&pool, &pool, &pool, &config, Some(2));
        assert_eq!(report.games, 2);

        // limits past the end are clamped
        let report = run_analyze(&pool, &pool, &pool, &config, Some(100));
        assert_eq!(report.games, 5);
    }
}
