//! Display functions for command results

use super::formatters::{distribution_bar, feedback_row};
use crate::game::{AnalysisReport, SimulationResult};
use colored::Colorize;

/// Print the round-by-round trace of a simulated game
pub fn print_simulation(result: &SimulationResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Hidden word: {}",
        result.hidden.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, (guess, feedback)) in result.trace.iter().enumerate() {
        println!(
            "Round {}: {} {}",
            i + 1,
            guess.text().to_uppercase(),
            feedback_row(*feedback)
        );
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("Solved in {} rounds", result.rounds).green().bold()
        );
    } else {
        println!(
            "{}",
            "No known word fits the feedback trail".red().bold()
        );
    }
}

/// Print aggregate analysis statistics
pub fn print_analysis_report(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ANALYSIS RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nGames:        {}", report.games);
    if report.games > 0 {
        println!(
            "Solved:       {} {}",
            report.solved,
            format!(
                "({:.1}%)",
                report.solved as f64 / report.games as f64 * 100.0
            )
            .green()
        );
    } else {
        println!("Solved:       {}", report.solved);
    }
    println!("Total rounds: {}", report.total_rounds);
    println!(
        "Mean rounds:  {}",
        format!("{:.3}", report.mean_rounds).bright_yellow().bold()
    );
    println!("Max rounds:   {}", report.max_rounds);
    println!("Time:         {:.2}s", report.duration.as_secs_f64());

    if report.max_rounds > 0 {
        println!("\n{}", "Round distribution".bright_cyan().bold());
        let largest = report.distribution.values().copied().max().unwrap_or(0);
        for rounds in 1..=report.max_rounds {
            let count = report.distribution.get(&rounds).copied().unwrap_or(0);
            let pct = if report.solved > 0 {
                count as f64 / report.solved as f64 * 100.0
            } else {
                0.0
            };
            println!(
                "  {rounds}: {} {count:4} ({pct:5.1}%)",
                distribution_bar(count, largest, 40).green()
            );
        }
    }
}
