//! Word list handling
//!
//! Runtime loading of dictionary and candidate files, plus list subtraction.

mod loader;

pub use loader::{load_from_file, parse_tokens, subtract};
