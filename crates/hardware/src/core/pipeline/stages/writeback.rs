//! Writeback (WB) Stage.
//!
//! Commits the MEM/WB result to the register file and retires the
//! instruction. Runs first in the cycle, so decode in the same cycle reads the
//! freshly written value.

use tracing::debug;

use crate::core::Cpu;
use crate::core::pipeline::latches::{InstrId, Latches};
use crate::core::pipeline::trace::Fate;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `prev` - Latches as they stood at the start of the cycle.
///
/// # Returns
///
/// The identity retired this cycle, if any.
pub fn wb_stage(cpu: &mut Cpu, prev: &Latches) -> Option<InstrId> {
    let wb = prev.mem_wb.entry?;

    if wb.ctrl.reg_write {
        let value = wb.result();
        cpu.regs.write(wb.rd, value);
        debug!(
            cycle = cpu.cycle(),
            id = wb.id.0,
            pc = wb.pc,
            rd = wb.rd,
            value,
            "retire"
        );
    } else {
        debug!(cycle = cpu.cycle(), id = wb.id.0, pc = wb.pc, "retire");
    }

    cpu.stats.record_retire(&wb.ctrl);
    cpu.set_fate(wb.id, Fate::Retired);
    Some(wb.id)
}
