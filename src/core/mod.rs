//! Core domain types
//!
//! The fundamental types of the game: validated words and packed feedback
//! codes. Everything here is pure and has no I/O.

mod feedback;
mod word;

pub use feedback::{Feedback, FEEDBACK_COUNT};
pub use word::{Word, WordError, WORD_LEN};
