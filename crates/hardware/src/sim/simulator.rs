//! Simulator: owns the core together with the run configuration.
//!
//! The core itself never fails and never stops on its own; this layer decides
//! when a run is over. A run ends when the program is exhausted and every latch
//! is empty, or when the configured cycle bound is reached.

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::hazards::HazardPolicy;
use crate::core::pipeline::latches::InstrId;
use crate::core::pipeline::trace::{CycleReport, InstrStatus, StageTrace};
use crate::sim::report::FinalState;
use crate::soc::DataMemory;
use crate::stats::SimStats;

/// How a run or step ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunOutcome {
    /// Program exhausted and every latch empty.
    Drained,
    /// The cycle budget ran out first.
    CycleLimit,
}

/// Result of [`Simulator::run`] or [`Simulator::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Cycles executed by this call.
    pub cycles: u64,
    /// How the run ended.
    pub outcome: RunOutcome,
}

/// Top-level simulator: core state plus run configuration.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The pipelined core.
    pub cpu: Cpu,
    config: Config,
    outcome: Option<RunOutcome>,
}

impl Simulator {
    /// Creates a simulator with an empty program.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config.pipeline.hazard_policy),
            config: config.clone(),
            outcome: None,
        }
    }

    /// Creates a default-configured simulator using `policy`.
    pub fn with_policy(policy: HazardPolicy) -> Self {
        let mut config = Config::default();
        config.pipeline.hazard_policy = policy;
        Self::new(&config)
    }

    /// The hazard policy in effect.
    pub const fn policy(&self) -> HazardPolicy {
        self.cpu.policy
    }

    /// Resets the core, installs `instructions` at address 0, and applies the
    /// configured initial memory.
    pub fn load(&mut self, instructions: &[u32]) {
        self.cpu.load(instructions);
        for init in &self.config.memory.initial {
            self.cpu.dmem.write(init.address, init.value);
        }
        self.outcome = None;
        info!(
            words = instructions.len(),
            policy = %self.cpu.policy,
            preloaded = self.config.memory.initial.len(),
            "program installed"
        );
    }

    /// Whether the loaded program has fully drained.
    pub fn is_drained(&self) -> bool {
        self.cpu.is_drained()
    }

    /// Advances exactly one cycle and returns its stage occupancy.
    pub fn tick(&mut self) -> CycleReport {
        self.tick_traced(&mut ())
    }

    /// Advances one cycle, reporting it to `sink`.
    pub fn tick_traced<T: StageTrace + ?Sized>(&mut self, sink: &mut T) -> CycleReport {
        self.cpu.tick(sink);
        let report = *self.cpu.last_report();
        if self.config.general.trace_instructions {
            debug!(
                cycle = report.cycle,
                occupancy = ?report.occupancy,
                stalled = report.stalled,
                redirect = ?report.redirect,
                "cycle"
            );
        }
        report
    }

    /// Advances up to `max_cycles` cycles, stopping early once drained.
    ///
    /// The drained check runs before every cycle, so stepping an already
    /// drained pipeline executes nothing.
    pub fn step(&mut self, max_cycles: u64) -> RunSummary {
        self.step_traced(max_cycles, &mut ())
    }

    /// [`Simulator::step`] with a stage-tracking sink.
    pub fn step_traced<T: StageTrace + ?Sized>(
        &mut self,
        max_cycles: u64,
        sink: &mut T,
    ) -> RunSummary {
        let mut cycles = 0;
        let outcome = loop {
            if self.cpu.is_drained() {
                break RunOutcome::Drained;
            }
            if cycles >= max_cycles {
                break RunOutcome::CycleLimit;
            }
            let _ = self.tick_traced(sink);
            cycles += 1;
        };
        self.outcome = Some(outcome);
        RunSummary { cycles, outcome }
    }

    /// Runs until drained or until `general.max_cycles` cycles have elapsed.
    pub fn run(&mut self) -> RunSummary {
        self.run_traced(&mut ())
    }

    /// [`Simulator::run`] with a stage-tracking sink.
    pub fn run_traced<T: StageTrace + ?Sized>(&mut self, sink: &mut T) -> RunSummary {
        let limit = self.config.general.max_cycles;
        let summary = self.step_traced(limit, sink);
        if summary.outcome == RunOutcome::CycleLimit {
            warn!(limit, "cycle limit reached before the pipeline drained");
        }
        info!(
            cycles = summary.cycles,
            retired = self.cpu.stats.instructions_retired,
            outcome = ?summary.outcome,
            "run finished"
        );
        summary
    }

    /// Register file.
    pub const fn registers(&self) -> &Gpr {
        &self.cpu.regs
    }

    /// Mutable register file, for seeding state after [`Simulator::load`].
    pub const fn registers_mut(&mut self) -> &mut Gpr {
        &mut self.cpu.regs
    }

    /// Data memory.
    pub const fn memory(&self) -> &DataMemory {
        &self.cpu.dmem
    }

    /// Mutable data memory, for seeding state after [`Simulator::load`].
    pub const fn memory_mut(&mut self) -> &mut DataMemory {
        &mut self.cpu.dmem
    }

    /// Performance counters.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Where instruction `id` stands.
    pub fn status(&self, id: InstrId) -> InstrStatus {
        self.cpu.status(id)
    }

    /// Snapshot of registers, memory and cycle count.
    pub fn final_state(&self) -> FinalState {
        FinalState {
            registers: self.cpu.regs.snapshot(),
            memory: self.cpu.dmem.iter().collect(),
            cycles: self.cpu.stats.cycles,
            outcome: self.outcome,
        }
    }
}
