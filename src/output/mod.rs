//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_analysis_report, print_simulation};
