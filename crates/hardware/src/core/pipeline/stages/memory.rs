//! Memory Access (MEM) Stage.
//!
//! The address is the ALU result. A load reads the cell there; both the read
//! data and the ALU result travel on to MEM/WB, where `memToReg` picks one. A
//! store writes the forwarded second operand.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::{Latches, MemWbEntry};

/// Executes the memory access stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `prev` - Latches as they stood at the start of the cycle.
pub fn mem_stage(cpu: &mut Cpu, prev: &Latches) {
    let Some(ex) = prev.ex_mem.entry else {
        cpu.latches.mem_wb.entry = None;
        return;
    };

    let mut load_data = 0;
    if ex.ctrl.mem_read {
        load_data = cpu.dmem.read(ex.alu);
        trace!(cycle = cpu.cycle(), id = ex.id.0, addr = ex.alu, value = load_data, "load");
    }
    if ex.ctrl.mem_write {
        cpu.dmem.write(ex.alu, ex.store_data);
        trace!(cycle = cpu.cycle(), id = ex.id.0, addr = ex.alu, value = ex.store_data, "store");
    }

    cpu.latches.mem_wb.entry = Some(MemWbEntry {
        id: ex.id,
        pc: ex.pc,
        rd: ex.rd,
        alu: ex.alu,
        load_data,
        ctrl: ex.ctrl,
    });
}
