//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! entire core state. It coordinates the following:
//! 1. **Architectural State:** Register file, data memory, program image and PC.
//! 2. **Pipeline State:** The four latches and the hazard policy driving them.
//! 3. **Identity Tracking:** The fetch log that maps instruction identities to
//!    addresses, words and fates, plus the last cycle's stage occupancy.

/// Per-cycle pipeline driver.
pub mod execution;

use crate::core::arch::gpr::Gpr;
use crate::core::arch::pc::ProgramCounter;
use crate::core::pipeline::hazards::HazardPolicy;
use crate::core::pipeline::latches::{InstrId, Latches};
use crate::core::pipeline::trace::{CycleReport, Fate, FetchRecord, InstrStatus, Stage};
use crate::soc::{DataMemory, ProgramImage};
use crate::stats::SimStats;

/// Main CPU structure containing all core state.
///
/// The shared mutable state is exactly the latches, the register file, the
/// data memory and the PC; each is written by one stage per cycle.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Sparse data memory.
    pub dmem: DataMemory,
    /// Loaded program.
    pub program: ProgramImage,
    /// Program counter controller.
    pub pc: ProgramCounter,
    /// Inter-stage latches.
    pub latches: Latches,
    /// Hazard-resolution strategy.
    pub policy: HazardPolicy,
    /// Performance counters.
    pub stats: SimStats,
    fetch_log: Vec<FetchRecord>,
    last_report: CycleReport,
}

impl Cpu {
    /// Creates an empty core using `policy`.
    pub fn new(policy: HazardPolicy) -> Self {
        Self {
            regs: Gpr::new(),
            dmem: DataMemory::new(),
            program: ProgramImage::default(),
            pc: ProgramCounter::default(),
            latches: Latches::default(),
            policy,
            stats: SimStats::default(),
            fetch_log: Vec::new(),
            last_report: CycleReport::default(),
        }
    }

    /// Resets all state, then installs `instructions` at address 0.
    ///
    /// Latches, PC, cycle counter, registers, data memory and identity
    /// tracking all return to their initial values.
    pub fn load(&mut self, instructions: &[u32]) {
        self.regs.clear();
        self.dmem.clear();
        self.latches.flush();
        self.pc.reset();
        self.stats = SimStats::default();
        self.fetch_log.clear();
        self.last_report = CycleReport::default();
        self.program = ProgramImage::new(instructions);
    }

    /// Number of the cycle currently being evaluated (1-based).
    pub const fn cycle(&self) -> u64 {
        self.stats.cycles + 1
    }

    /// Assigns the next identity to a fetch of `inst` at `pc`.
    pub(crate) fn record_fetch(&mut self, pc: u64, inst: u32) -> InstrId {
        let id = InstrId(self.fetch_log.len() as u64);
        self.fetch_log.push(FetchRecord {
            id,
            pc,
            inst,
            cycle: self.cycle(),
            fate: Fate::Pending,
        });
        id
    }

    /// Records how `id` left the pipeline.
    pub(crate) fn set_fate(&mut self, id: InstrId, fate: Fate) {
        if let Some(record) = self.fetch_log.get_mut(id.index()) {
            record.fate = fate;
        }
    }

    /// Every fetch so far, in identity order.
    pub fn fetch_log(&self) -> &[FetchRecord] {
        &self.fetch_log
    }

    /// Stage occupancy reported by the most recent cycle.
    pub const fn last_report(&self) -> &CycleReport {
        &self.last_report
    }

    /// Where instruction `id` stands after the most recent cycle.
    ///
    /// Once the core has drained, the final cycle's write-back has completed
    /// and every fetched identity reports its fate.
    pub fn status(&self, id: InstrId) -> InstrStatus {
        let Some(record) = self.fetch_log.get(id.index()) else {
            return InstrStatus::NotFetched;
        };
        if !self.is_drained()
            && let Some(stage) = self.last_report.stage_of(id)
        {
            return InstrStatus::InFlight(stage);
        }
        match record.fate {
            Fate::Retired => InstrStatus::Retired,
            Fate::Squashed => InstrStatus::Squashed,
            // A pending identity always sits in some latch; before the first
            // report is taken that latch is IF/ID.
            Fate::Pending => InstrStatus::InFlight(Stage::Fetch),
        }
    }
}
