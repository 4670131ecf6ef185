//! Stage Tracking.
//!
//! Each cycle the core reports which instruction identity occupies which
//! stage. Occupancy is read off the latches at the end of the cycle:
//!
//! | Stage     | Occupant                                  |
//! |-----------|-------------------------------------------|
//! | Fetch     | instruction held in IF/ID                 |
//! | Decode    | instruction held in ID/EX                 |
//! | Execute   | instruction held in EX/MEM                |
//! | Memory    | instruction held in MEM/WB                |
//! | Writeback | instruction written back during the cycle |
//!
//! A stalled instruction stays in IF/ID, so it reports `Fetch` again; the
//! bubble below it has no identity and reports nothing.

use std::fmt;

use crate::core::pipeline::latches::InstrId;

/// A pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Instruction fetch.
    Fetch,
    /// Instruction decode and register read.
    Decode,
    /// Execute.
    Execute,
    /// Memory access.
    Memory,
    /// Register write-back.
    Writeback,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Self; 5] = [
        Self::Fetch,
        Self::Decode,
        Self::Execute,
        Self::Memory,
        Self::Writeback,
    ];

    /// Three-character label used in pipeline diagrams.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fetch => "IF ",
            Self::Decode => "ID ",
            Self::Execute => "EX ",
            Self::Memory => "MEM",
            Self::Writeback => "WB ",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end())
    }
}

/// Where an instruction identity stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstrStatus {
    /// No fetch has produced this identity yet.
    NotFetched,
    /// Occupies the given stage as of the last cycle.
    InFlight(Stage),
    /// Completed write-back.
    Retired,
    /// Discarded from a taken transfer's shadow.
    Squashed,
}

/// Terminal fate recorded in the fetch log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Fate {
    /// Still travelling down the pipeline.
    #[default]
    Pending,
    /// Written back.
    Retired,
    /// Squashed in decode.
    Squashed,
}

/// One fetch, as recorded when its identity was assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchRecord {
    /// Assigned identity.
    pub id: InstrId,
    /// Fetch address.
    pub pc: u64,
    /// Fetched word.
    pub inst: u32,
    /// Cycle in which the fetch happened (1-based).
    pub cycle: u64,
    /// How the instruction left the pipeline, if it has.
    pub fate: Fate,
}

/// Stage occupancy and control events for one completed cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Cycle number (1-based).
    pub cycle: u64,
    /// Occupant of each stage, indexed in [`Stage::ALL`] order.
    pub occupancy: [Option<InstrId>; 5],
    /// Decode stalled and a bubble entered ID/EX.
    pub stalled: bool,
    /// Target address of a transfer resolved this cycle.
    pub redirect: Option<u64>,
    /// Instruction discarded by decode this cycle.
    pub squashed: Option<InstrId>,
}

impl CycleReport {
    /// Identity occupying `stage`, if any.
    pub const fn occupant(&self, stage: Stage) -> Option<InstrId> {
        self.occupancy[stage.index()]
    }

    /// Stage occupied by `id`, if any.
    pub fn stage_of(&self, id: InstrId) -> Option<Stage> {
        Stage::ALL
            .into_iter()
            .find(|&s| self.occupant(s) == Some(id))
    }
}

/// Receives per-cycle stage tracking from the core.
///
/// `()` is the no-op sink.
pub trait StageTrace {
    /// Called once per fetch that assigned a new identity, before `on_cycle`.
    fn on_fetch(&mut self, _record: &FetchRecord) {}

    /// Called at the end of every cycle.
    fn on_cycle(&mut self, report: &CycleReport);
}

impl StageTrace for () {
    fn on_cycle(&mut self, _report: &CycleReport) {}
}

/// Collects every report; handy for inspecting short runs.
#[derive(Clone, Debug, Default)]
pub struct RecordingTrace {
    /// Fetches in order.
    pub fetches: Vec<FetchRecord>,
    /// Cycle reports in order.
    pub cycles: Vec<CycleReport>,
}

impl StageTrace for RecordingTrace {
    fn on_fetch(&mut self, record: &FetchRecord) {
        self.fetches.push(*record);
    }

    fn on_cycle(&mut self, report: &CycleReport) {
        self.cycles.push(*report);
    }
}

impl RecordingTrace {
    /// The stage `id` occupied in each recorded cycle, `None` where absent.
    pub fn timeline(&self, id: InstrId) -> Vec<Option<Stage>> {
        self.cycles.iter().map(|c| c.stage_of(id)).collect()
    }
}
