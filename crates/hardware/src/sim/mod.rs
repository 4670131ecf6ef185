//! Simulation front end.
//!
//! Everything that sits around the core: program loading, the run loop and
//! its termination rule, pipeline diagrams, and the final-state report.

/// Stage-occupancy diagram built from cycle reports.
pub mod diagram;
/// Program text parsing.
pub mod loader;
/// Final architectural state.
pub mod report;
/// Run control around the core.
pub mod simulator;

pub use self::diagram::PipelineDiagram;
pub use self::loader::{Program, load_program_file, parse_program};
pub use self::report::FinalState;
pub use self::simulator::{RunOutcome, RunSummary, Simulator};
