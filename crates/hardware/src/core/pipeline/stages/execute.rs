//! Execute (EX) Stage.
//!
//! This module performs the ALU half of the pipeline. It:
//! 1. **Forwards:** Under the forwarding policy, replaces stale register reads
//!    with results from EX/MEM and MEM/WB as they stood at the start of the cycle.
//! 2. **Selects Operands:** `aluSrc` picks the immediate for operand B; jumps use
//!    their `(pc, 4)` pair untouched so the ALU yields the return address.
//! 3. **Computes:** Runs the ALU operation chosen by ALU control.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::forwarding::{Operand, forward_rs};
use crate::core::pipeline::latches::{ExMemEntry, Latches};
use crate::core::pipeline::signals::AluOp;
use crate::core::units::alu::Alu;
use crate::core::units::alu::control::alu_control;

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `prev` - Latches as they stood at the start of the cycle.
pub fn execute_stage(cpu: &mut Cpu, prev: &Latches) {
    let Some(id) = prev.id_ex.entry else {
        cpu.latches.ex_mem.entry = None;
        return;
    };

    let (fa, fb) = if cpu.policy.forwards() && !id.ctrl.jump {
        forward_rs(&id, &prev.ex_mem, &prev.mem_wb)
    } else {
        (
            Operand { value: id.rv1, ..Operand::default() },
            Operand { value: id.rv2, ..Operand::default() },
        )
    };

    for (reg, operand) in [(id.rs1, fa), (id.rs2, fb)] {
        if operand.is_forwarded() {
            cpu.stats.forwards += 1;
            trace!(
                cycle = cpu.cycle(),
                id = id.id.0,
                reg,
                value = operand.value,
                source = %operand.source,
                "forward"
            );
        }
    }

    let (a, b, op) = if id.ctrl.jump {
        (fa.value, fb.value, AluOp::Add)
    } else {
        let b = if id.ctrl.alu_src { id.imm as u64 } else { fb.value };
        let op = alu_control(id.ctrl.alu_op, id.funct3, id.funct7, id.ctrl.alu_src);
        (fa.value, b, op)
    };

    let alu = Alu::execute(op, a, b);
    cpu.latches.ex_mem.entry = Some(ExMemEntry {
        id: id.id,
        pc: id.pc,
        rd: id.rd,
        alu,
        store_data: fb.value,
        ctrl: id.ctrl,
    });
}
