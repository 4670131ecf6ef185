//! Operand Forwarding.
//!
//! Selects each operand's source among the register-file read, the EX/MEM
//! latch and the MEM/WB latch. EX/MEM wins over MEM/WB because it holds the
//! more recent result. Execute applies this to the latches as they stood at the
//! start of the cycle; decode applies it to the latches produced this cycle to
//! bypass branch and JALR operands.

use std::fmt;

use crate::core::pipeline::latches::{ExMem, IdExEntry, MemWb};

/// Where an operand value came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ForwardSource {
    /// Register-file read in decode.
    #[default]
    RegFile,
    /// ALU result held in EX/MEM.
    ExMem,
    /// Writeback value held in MEM/WB.
    MemWb,
}

impl fmt::Display for ForwardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RegFile => "regfile",
            Self::ExMem => "ex/mem",
            Self::MemWb => "mem/wb",
        })
    }
}

/// A selected operand value and its source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operand {
    /// The operand value.
    pub value: u64,
    /// Where it came from.
    pub source: ForwardSource,
}

impl Operand {
    /// Whether the value bypassed the register file.
    pub fn is_forwarded(&self) -> bool {
        self.source != ForwardSource::RegFile
    }
}

/// Selects the most recent value of register `reg`.
///
/// # Arguments
///
/// * `reg` - Source register index.
/// * `reg_value` - Value read from the register file.
/// * `ex_mem` - EX/MEM latch; a load there has no value yet and is skipped.
/// * `mem_wb` - MEM/WB latch.
///
/// # Returns
///
/// The selected [`Operand`]. `x0` never matches a producer.
pub fn forward_operand(reg: usize, reg_value: u64, ex_mem: &ExMem, mem_wb: &MemWb) -> Operand {
    if reg == 0 {
        return Operand {
            value: reg_value,
            source: ForwardSource::RegFile,
        };
    }

    if let Some(e) = ex_mem.entry
        && e.ctrl.reg_write
        && !e.ctrl.mem_read
        && e.rd == reg
    {
        return Operand {
            value: e.alu,
            source: ForwardSource::ExMem,
        };
    }

    if let Some(e) = mem_wb.entry
        && e.ctrl.reg_write
        && e.rd == reg
    {
        return Operand {
            value: e.result(),
            source: ForwardSource::MemWb,
        };
    }

    Operand {
        value: reg_value,
        source: ForwardSource::RegFile,
    }
}

/// Forwards both ALU source operands of an ID/EX entry.
///
/// # Returns
///
/// `(a, b)`: the selected values for `rs1` and `rs2`.
pub fn forward_rs(entry: &IdExEntry, ex_mem: &ExMem, mem_wb: &MemWb) -> (Operand, Operand) {
    (
        forward_operand(entry.rs1, entry.rv1, ex_mem, mem_wb),
        forward_operand(entry.rs2, entry.rv2, ex_mem, mem_wb),
    )
}
