//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the four latches of the five-stage pipeline:
//! Fetch → IF/ID → Decode → ID/EX → Execute → EX/MEM → Memory → MEM/WB → Writeback.
//!
//! 1. **Identity:** Every live entry carries the [`InstrId`] assigned at fetch.
//!    An empty latch (`entry == None`) is a bubble or nothing at all; there is
//!    no sentinel index to confuse with a real one.
//! 2. **Instruction Flow:** Each entry carries the data and control signals the
//!    next stage consumes.
//! 3. **Bubbles:** Empty latches report [`ControlSignals::NOP`].

use std::fmt;

use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;

/// Identity of a fetched instruction, assigned sequentially from zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstrId(pub u64);

impl InstrId {
    /// Position of this identity in a fetch-ordered log.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for InstrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Identity assigned at fetch.
    pub id: InstrId,
    /// Program counter of the instruction.
    pub pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Fetched into the shadow of a taken transfer; decode discards it.
    pub squashed: bool,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Identity assigned at fetch.
    pub id: InstrId,
    /// Program counter of the instruction.
    pub pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// First source register index, zero when the operand is not a register.
    pub rs1: usize,
    /// Second source register index, zero when the operand is not a register.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
    /// Sign-extended immediate value.
    pub imm: i64,
    /// Operand A: the `rs1` read, or the PC for jumps.
    pub rv1: u64,
    /// Operand B: the `rs2` read, or 4 for jumps.
    pub rv2: u64,
    /// Raw `rs1` value captured for JALR, kept apart from the overridden operands.
    pub jalr_base: u64,
    /// Function code 3.
    pub funct3: u32,
    /// Function code 7.
    pub funct7: u32,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Identity assigned at fetch.
    pub id: InstrId,
    /// Program counter of the instruction.
    pub pc: u64,
    /// Destination register index.
    pub rd: usize,
    /// ALU result (memory address for loads and stores).
    pub alu: u64,
    /// Second operand after forwarding, stored by `memWrite`.
    pub store_data: u64,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Identity assigned at fetch.
    pub id: InstrId,
    /// Program counter of the instruction.
    pub pc: u64,
    /// Destination register index.
    pub rd: usize,
    /// ALU result.
    pub alu: u64,
    /// Data read from memory (zero unless `memRead`).
    pub load_data: u64,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
}

impl MemWbEntry {
    /// The value written back: load data under `memToReg`, else the ALU result.
    pub const fn result(&self) -> u64 {
        if self.ctrl.mem_to_reg {
            self.load_data
        } else {
            self.alu
        }
    }
}

/// IF/ID latch.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfId {
    /// The held instruction, if any.
    pub entry: Option<IfIdEntry>,
}

/// ID/EX latch.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// The held instruction, if any.
    pub entry: Option<IdExEntry>,
}

/// EX/MEM latch.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// The held instruction, if any.
    pub entry: Option<ExMemEntry>,
}

/// MEM/WB latch.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// The held instruction, if any.
    pub entry: Option<MemWbEntry>,
}

macro_rules! impl_latch {
    ($latch:ty) => {
        impl PipelineLatch for $latch {
            fn flush(&mut self) {
                self.entry = None;
            }

            fn is_empty(&self) -> bool {
                self.entry.is_none()
            }

            fn instr_id(&self) -> Option<InstrId> {
                self.entry.map(|e| e.id)
            }
        }
    };
}

impl_latch!(IfId);
impl_latch!(IdEx);
impl_latch!(ExMem);
impl_latch!(MemWb);

macro_rules! impl_ctrl {
    ($latch:ty) => {
        impl $latch {
            /// Control signals of the held instruction, or the no-op bundle.
            pub fn ctrl(&self) -> ControlSignals {
                self.entry.map_or(ControlSignals::NOP, |e| e.ctrl)
            }
        }
    };
}

impl_ctrl!(IdEx);
impl_ctrl!(ExMem);
impl_ctrl!(MemWb);

/// The four latches, copied wholesale at the start of every cycle.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Latches {
    /// Fetch to Decode.
    pub if_id: IfId,
    /// Decode to Execute.
    pub id_ex: IdEx,
    /// Execute to Memory.
    pub ex_mem: ExMem,
    /// Memory to Writeback.
    pub mem_wb: MemWb,
}

impl Latches {
    /// Whether every latch is empty.
    pub fn is_empty(&self) -> bool {
        self.if_id.is_empty()
            && self.id_ex.is_empty()
            && self.ex_mem.is_empty()
            && self.mem_wb.is_empty()
    }

    /// Empties every latch.
    pub fn flush(&mut self) {
        self.if_id.flush();
        self.id_ex.flush();
        self.ex_mem.flush();
        self.mem_wb.flush();
    }
}
