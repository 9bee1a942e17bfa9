//! Game orchestration
//!
//! The interactive session state machine and the batch self-play driver built
//! on top of it.

pub mod analysis;
mod session;

pub use analysis::{run_analysis, simulate, AnalysisReport, SimulationResult};
pub use session::{GameState, Session};
