//! Final-State Report.
//!
//! Snapshot of everything a run leaves behind: nonzero registers, written
//! memory cells, the cycle total and how the run ended.

use std::fmt;

use crate::common::constants::NUM_GPRS;
use crate::sim::simulator::RunOutcome;

/// Architectural state after a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalState {
    /// All 32 registers, `x0` included.
    pub registers: [u64; NUM_GPRS],
    /// Written memory cells in ascending address order.
    pub memory: Vec<(u64, u64)>,
    /// Total cycles since the program was loaded.
    pub cycles: u64,
    /// How the most recent run ended, `None` if nothing ran.
    pub outcome: Option<RunOutcome>,
}

impl FinalState {
    /// Whether the architectural state (registers and memory) matches `other`.
    ///
    /// Cycle counts are ignored; the two hazard policies must agree on
    /// everything else.
    pub fn same_architecture(&self, other: &Self) -> bool {
        self.registers == other.registers && self.memory == other.memory
    }
}

impl fmt::Display for FinalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final Register Values:")?;
        for (i, v) in self.registers.iter().enumerate().filter(|&(_, &v)| v != 0) {
            writeln!(f, "x{i}: {}", *v as i64)?;
        }
        writeln!(f)?;
        writeln!(f, "Final Memory Values:")?;
        for (addr, value) in &self.memory {
            writeln!(f, "{addr:#x}: {value:#x}")?;
        }
        writeln!(f)?;
        write!(f, "Total cycles: {}", self.cycles)?;
        if self.outcome == Some(RunOutcome::CycleLimit) {
            write!(f, " (cycle limit reached)")?;
        }
        writeln!(f)
    }
}
