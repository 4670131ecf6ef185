//! Instruction Fetch (IF) Stage.
//!
//! Reads the word at the current PC into IF/ID and gives it a fresh identity.
//! A stall leaves IF/ID untouched. Past the end of the program the latch is
//! left empty, which downstream stages see as a bubble. When decode resolved a
//! taken transfer this cycle, the fetched word is already in its shadow and is
//! marked for squashing; the target is fetched next cycle under a new identity.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::hazards::FlowControl;
use crate::core::pipeline::latches::{IfIdEntry, InstrId};

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `flow` - Decode's verdict for this cycle.
///
/// # Returns
///
/// The identity assigned by this fetch, if one happened.
pub fn fetch_stage(cpu: &mut Cpu, flow: FlowControl) -> Option<InstrId> {
    if flow.is_stall() {
        return None;
    }

    let pc = cpu.pc.current();
    let Some(inst) = cpu.program.fetch(pc) else {
        cpu.latches.if_id.entry = None;
        return None;
    };

    let id = cpu.record_fetch(pc, inst);
    trace!(cycle = cpu.cycle(), id = id.0, pc, inst, shadow = flow.is_flush(), "fetch");
    cpu.latches.if_id.entry = Some(IfIdEntry {
        id,
        pc,
        inst,
        squashed: flow.is_flush(),
    });
    Some(id)
}
