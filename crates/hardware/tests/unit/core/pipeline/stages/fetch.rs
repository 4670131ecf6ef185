//! Fetch Stage.

use rvpipe_core::core::Cpu;
use rvpipe_core::core::pipeline::hazards::{FlowControl, HazardPolicy};
use rvpipe_core::core::pipeline::latches::{IfIdEntry, InstrId};
use rvpipe_core::core::pipeline::stages::fetch_stage;

use crate::common::builder::instruction::asm;

fn cpu_with(program: &[u32]) -> Cpu {
    let mut cpu = Cpu::new(HazardPolicy::Forwarding);
    cpu.load(program);
    cpu
}

#[test]
fn assigns_sequential_identities() {
    let mut cpu = cpu_with(&[asm::addi(1, 0, 1), asm::addi(2, 0, 2)]);

    assert_eq!(fetch_stage(&mut cpu, FlowControl::Proceed), Some(InstrId(0)));
    cpu.pc.advance(false, None);
    assert_eq!(fetch_stage(&mut cpu, FlowControl::Proceed), Some(InstrId(1)));

    let entry = cpu.latches.if_id.entry;
    assert_eq!(
        entry,
        Some(IfIdEntry {
            id: InstrId(1),
            pc: 4,
            inst: asm::addi(2, 0, 2),
            squashed: false,
        })
    );
    assert_eq!(cpu.fetch_log().len(), 2);
}

#[test]
fn stall_leaves_latch_untouched() {
    let mut cpu = cpu_with(&[asm::addi(1, 0, 1), asm::addi(2, 0, 2)]);
    let _ = fetch_stage(&mut cpu, FlowControl::Proceed);
    let held = cpu.latches.if_id;
    cpu.pc.advance(false, None);

    assert_eq!(fetch_stage(&mut cpu, FlowControl::Stall), None);
    assert_eq!(cpu.latches.if_id, held);
    assert_eq!(cpu.fetch_log().len(), 1);
}

#[test]
fn redirect_marks_shadow_fetch() {
    let mut cpu = cpu_with(&[asm::addi(1, 0, 1)]);
    let _ = fetch_stage(&mut cpu, FlowControl::Redirect { delta: 8 });
    assert!(cpu.latches.if_id.entry.is_some_and(|e| e.squashed));
}

#[test]
fn past_end_leaves_bubble() {
    let mut cpu = cpu_with(&[asm::addi(1, 0, 1)]);
    let _ = fetch_stage(&mut cpu, FlowControl::Proceed);
    cpu.pc.advance(false, None);
    assert_eq!(fetch_stage(&mut cpu, FlowControl::Proceed), None);
    assert!(cpu.latches.if_id.entry.is_none());
}
