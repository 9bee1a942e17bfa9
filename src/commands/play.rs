//! Interactive advisor mode
//!
//! Proposes a guess, reads the feedback the real game gave, and narrows the
//! candidate sets until the word is confirmed or nothing fits.

use crate::core::Feedback;
use crate::engine::PartitionStats;
use crate::game::{GameState, Session};
use crate::output::formatters::feedback_row;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive prompt loop over a session.
///
/// Feedback is one token per guess: five characters from `0`/`B` (absent),
/// `1`/`Y` (misplaced), `2`/`G` (correct). Malformed tokens re-prompt without
/// touching the game state; `quit` leaves the loop.
///
/// # Errors
/// Returns an error on stdin/stdout failure.
pub fn run_play(session: &mut Session) -> Result<(), String> {
    println!("\nHow to play: enter each proposed word in Wordle, then type the");
    println!("response back, one character per letter:");
    println!("  0 or B  letter absent");
    println!("  1 or Y  letter present, wrong position");
    println!("  2 or G  letter in the correct position");
    println!("Type 'quit' to stop.\n");

    loop {
        match session.state().clone() {
            GameState::AwaitingGuess => {
                let candidates = session.candidates().to_vec();
                let round = session.round();
                let guess = session.propose();

                let stats = PartitionStats::compute(&guess, &candidates);
                println!("{}", "=====".bright_black());
                println!(
                    "Round {round}: {}",
                    guess.text().to_uppercase().bright_yellow().bold()
                );
                if stats.is_member {
                    println!(" * Member of the current candidate set");
                }
                println!(" * Candidate partitions: {}", stats.classes);
                println!(" * Largest partition:    {}", stats.worst);
                println!("{}", "=====".bright_black());

                let Some(feedback) = read_feedback(&guess.text().to_uppercase())? else {
                    println!("\nStopping here. Good luck!");
                    return Ok(());
                };
                println!("  {}", feedback_row(feedback));

                session.observe(feedback);

                if session.fallback_promoted() {
                    println!(
                        "{}",
                        "Out of candidates, switching to the fallback list.".yellow()
                    );
                }
                if let GameState::AwaitingGuess = session.state() {
                    let left = session.candidates().len();
                    println!("Candidates left: {left}");
                    if left <= 10 {
                        for word in session.candidates() {
                            print!("{}, ", word.text().to_uppercase());
                        }
                        println!();
                    }
                }
            }
            GameState::Solved { word, rounds } => {
                println!(
                    "\n{}",
                    format!(
                        "Answer: {}, found in {rounds} rounds.",
                        word.text().to_uppercase()
                    )
                    .green()
                    .bold()
                );
                return Ok(());
            }
            GameState::Exhausted => {
                println!(
                    "\n{}",
                    "No known word fits that feedback. No idea!".red().bold()
                );
                return Ok(());
            }
            GameState::AwaitingFeedback => {
                // unreachable: this loop always observes right after proposing
                return Ok(());
            }
        }
    }
}

/// Prompt until a well-formed feedback token (or `quit`) arrives.
///
/// Returns `None` when the user quits.
fn read_feedback(guess: &str) -> Result<Option<Feedback>, String> {
    loop {
        print!("{guess} ----> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| e.to_string())?;
        let token = input.trim();

        if token.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        if let Some(feedback) = Feedback::from_response(token) {
            return Ok(Some(feedback));
        }

        println!(
            "{}",
            "Invalid response: five characters, each 0/B, 1/Y or 2/G.".red()
        );
    }
}
