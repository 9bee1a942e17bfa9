//! Guess-selection engine
//!
//! One configurable engine covers both play styles: the Wordle policy
//! maximizes the number of candidate-set partitions, the Absurdle policy
//! minimizes the largest one.

mod config;
mod eliminate;
mod partition;
mod select;

pub use config::{EngineConfig, Objective};
pub use eliminate::eliminate;
pub use partition::PartitionStats;
pub use select::select_guess;
