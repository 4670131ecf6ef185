//! Instruction Decode (ID) Stage.
//!
//! This module implements the decode stage of the instruction pipeline. It
//! performs:
//! 1. **Squash:** Discards an instruction fetched into a taken transfer's shadow.
//! 2. **Control Generation:** Decodes the word and derives the control bundle.
//! 3. **Hazard Detection:** Asks the hazard policy whether the instruction must
//!    wait; if so a bubble enters ID/EX and fetch holds.
//! 4. **Register Read:** Reads `rs1`/`rs2`, or sets up the `(pc, 4)` operand pair
//!    for jumps while keeping the JALR base apart.
//! 5. **Transfer Resolution:** Resolves branches and jumps here, bypassing
//!    their operands from this cycle's EX/MEM and MEM/WB under forwarding.

use tracing::{debug, trace};

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::forwarding::forward_operand;
use crate::core::pipeline::hazards::FlowControl;
use crate::core::pipeline::latches::{IdExEntry, InstrId, Latches};
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::trace::Fate;
use crate::core::units::bru::BranchUnit;
use crate::isa::decode::decode;
use crate::isa::instruction::{Decoded, InstrClass};

/// Result of the decode stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOutput {
    /// Verdict for fetch and the PC controller.
    pub flow: FlowControl,
    /// Target address when a transfer was taken.
    pub target: Option<u64>,
    /// Identity discarded from the IF/ID latch this cycle.
    pub squashed: Option<InstrId>,
}

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state. `cpu.latches.ex_mem` and
///   `cpu.latches.mem_wb` already hold this cycle's results.
/// * `prev` - Latches as they stood at the start of the cycle.
///
/// # Returns
///
/// The stall/redirect verdict and any squashed identity.
pub fn decode_stage(cpu: &mut Cpu, prev: &Latches) -> DecodeOutput {
    let Some(fetched) = prev.if_id.entry else {
        cpu.latches.id_ex.entry = None;
        return DecodeOutput::default();
    };

    if fetched.squashed {
        cpu.latches.id_ex.entry = None;
        cpu.set_fate(fetched.id, Fate::Squashed);
        debug!(cycle = cpu.cycle(), id = fetched.id.0, pc = fetched.pc, "squash");
        return DecodeOutput {
            squashed: Some(fetched.id),
            ..DecodeOutput::default()
        };
    }

    let d = decode(fetched.inst);
    let ctrl = ControlSignals::for_class(d.class);

    if cpu.policy.must_stall(d.sources(), &prev.id_ex, &prev.ex_mem) {
        cpu.latches.id_ex.entry = None;
        debug!(
            cycle = cpu.cycle(),
            id = fetched.id.0,
            pc = fetched.pc,
            policy = %cpu.policy,
            "stall"
        );
        return DecodeOutput {
            flow: FlowControl::Stall,
            ..DecodeOutput::default()
        };
    }

    let [src1, src2] = d.sources();
    let rs1 = src1.unwrap_or(0);
    let rs2 = src2.unwrap_or(0);
    let rv1 = cpu.regs.read(rs1);
    let rv2 = cpu.regs.read(rs2);

    let (a, b) = if d.class.is_control_flow() {
        transfer_operands(cpu, fetched.id, [(rs1, rv1), (rs2, rv2)])
    } else {
        (rv1, rv2)
    };

    let target = resolve_transfer(&d, fetched.pc, a, b);
    let flow = match target {
        Some(t) => {
            let delta = cpu.pc.delta_to(t);
            debug!(
                cycle = cpu.cycle(),
                id = fetched.id.0,
                pc = fetched.pc,
                target = t,
                delta,
                "redirect"
            );
            FlowControl::Redirect { delta }
        }
        None => FlowControl::Proceed,
    };

    let entry = if ctrl.jump {
        IdExEntry {
            rs1: 0,
            rs2: 0,
            rv1: fetched.pc,
            rv2: INSTRUCTION_SIZE,
            jalr_base: if d.class == InstrClass::Jalr { a } else { 0 },
            ..base_entry(&d, fetched.id, fetched.pc, ctrl)
        }
    } else {
        IdExEntry {
            rs1,
            rs2,
            rv1,
            rv2,
            ..base_entry(&d, fetched.id, fetched.pc, ctrl)
        }
    };
    cpu.latches.id_ex.entry = Some(entry);

    DecodeOutput {
        flow,
        target,
        squashed: None,
    }
}

fn base_entry(d: &Decoded, id: InstrId, pc: u64, ctrl: ControlSignals) -> IdExEntry {
    IdExEntry {
        id,
        pc,
        inst: d.raw,
        rd: if ctrl.reg_write { d.rd } else { 0 },
        imm: d.imm,
        funct3: d.funct3,
        funct7: d.funct7,
        ctrl,
        ..IdExEntry::default()
    }
}

/// Operands for a branch or jump resolved in decode.
///
/// Under forwarding the values come from this cycle's EX/MEM and MEM/WB when
/// they hold a newer result than the register file.
fn transfer_operands(cpu: &mut Cpu, id: InstrId, regs: [(usize, u64); 2]) -> (u64, u64) {
    if !cpu.policy.forwards() {
        return (regs[0].1, regs[1].1);
    }

    let [a, b] = regs.map(|(reg, value)| {
        forward_operand(reg, value, &cpu.latches.ex_mem, &cpu.latches.mem_wb)
    });
    for (reg, operand) in [(regs[0].0, a), (regs[1].0, b)] {
        if operand.is_forwarded() {
            cpu.stats.forwards += 1;
            trace!(
                cycle = cpu.cycle(),
                id = id.0,
                reg,
                value = operand.value,
                source = %operand.source,
                "bypass to decode"
            );
        }
    }
    (a.value, b.value)
}

/// Target of a taken branch or jump, `None` when execution falls through.
fn resolve_transfer(d: &Decoded, pc: u64, a: u64, b: u64) -> Option<u64> {
    match d.class {
        InstrClass::Branch => {
            BranchUnit::taken(d.funct3, a, b).then(|| BranchUnit::relative_target(pc, d.imm))
        }
        InstrClass::Jal => Some(BranchUnit::relative_target(pc, d.imm)),
        InstrClass::Jalr => Some(BranchUnit::register_target(a, d.imm)),
        _ => None,
    }
}
