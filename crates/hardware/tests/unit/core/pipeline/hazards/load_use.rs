//! Load-Use Hazard Detection Tests.
//!
//! Verifies that `need_stall_load_use` stalls only when a load sits in
//! execute and the decoding instruction reads its destination.

use rvpipe_core::core::pipeline::hazards::{HazardPolicy, need_stall_load_use};
use rvpipe_core::core::pipeline::latches::{ExMem, IdEx, IdExEntry};
use rvpipe_core::core::pipeline::signals::ControlSignals;
use rvpipe_core::isa::instruction::InstrClass;

use crate::common::builder::instruction::asm;
use crate::common::harness::run_program;

/// Helper: ID/EX holding a load that writes `rd`.
fn load_in_ex(rd: usize) -> IdEx {
    IdEx {
        entry: Some(IdExEntry {
            rd,
            ctrl: ControlSignals::for_class(InstrClass::Load),
            ..Default::default()
        }),
    }
}

/// Helper: ID/EX holding an ALU instruction that writes `rd`.
fn alu_in_ex(rd: usize) -> IdEx {
    IdEx {
        entry: Some(IdExEntry {
            rd,
            ctrl: ControlSignals::for_class(InstrClass::RType),
            ..Default::default()
        }),
    }
}

// ══════════════════════════════════════════════════════════
// 1. Detection
// ══════════════════════════════════════════════════════════

#[test]
fn stall_when_load_rd_matches_rs1() {
    assert!(need_stall_load_use([Some(5), None], &load_in_ex(5)));
}

#[test]
fn stall_when_load_rd_matches_rs2() {
    assert!(need_stall_load_use([Some(1), Some(5)], &load_in_ex(5)));
}

#[test]
fn no_stall_for_unrelated_registers() {
    assert!(!need_stall_load_use([Some(1), Some(2)], &load_in_ex(5)));
}

#[test]
fn no_stall_for_alu_producer() {
    assert!(!need_stall_load_use([Some(5), Some(5)], &alu_in_ex(5)));
}

#[test]
fn no_stall_for_load_into_x0() {
    assert!(!need_stall_load_use([Some(0), Some(0)], &load_in_ex(0)));
}

#[test]
fn unused_source_slot_never_stalls() {
    assert!(!need_stall_load_use([None, None], &load_in_ex(5)));
}

#[test]
fn empty_latch_never_stalls() {
    assert!(!need_stall_load_use([Some(5), Some(5)], &IdEx::default()));
}

#[test]
fn forwarding_policy_uses_load_use_check() {
    let policy = HazardPolicy::Forwarding;
    assert!(policy.must_stall([Some(5), None], &load_in_ex(5), &ExMem::default()));
    assert!(!policy.must_stall([Some(5), None], &alu_in_ex(5), &ExMem::default()));
}

// ══════════════════════════════════════════════════════════
// 2. Whole-program timing
// ══════════════════════════════════════════════════════════

#[test]
fn dependent_add_after_load_stalls_once_with_forwarding() {
    let program = [asm::lw(5, 0, 0), asm::add(6, 5, 5)];
    let ctx = run_program(HazardPolicy::Forwarding, &program, &[(0, 7)]);
    assert_eq!(ctx.reg(5), 7);
    assert_eq!(ctx.reg(6), 14);
    assert_eq!(ctx.sim.stats().cycles, 7);
    assert_eq!(ctx.sim.stats().stalls_data, 1);
}

#[test]
fn dependent_add_after_load_stalls_twice_without_forwarding() {
    let program = [asm::lw(5, 0, 0), asm::add(6, 5, 5)];
    let ctx = run_program(HazardPolicy::Stall, &program, &[(0, 7)]);
    assert_eq!(ctx.reg(6), 14);
    assert_eq!(ctx.sim.stats().cycles, 8);
    assert_eq!(ctx.sim.stats().stalls_data, 2);
}

#[test]
fn independent_instruction_after_load_does_not_stall() {
    let program = [asm::lw(5, 0, 0), asm::addi(6, 0, 1), asm::add(7, 5, 6)];
    let ctx = run_program(HazardPolicy::Forwarding, &program, &[(0, 7)]);
    assert_eq!(ctx.reg(7), 8);
    assert_eq!(ctx.sim.stats().stalls_data, 0);
}

#[test]
fn branch_on_loaded_value_waits_for_load() {
    // lw x1 ; beq x1, x0, +8 ; addi x2, x0, 1 ; addi x3, x0, 3
    let program = [
        asm::lw(1, 0, 0),
        asm::beq(1, 0, 8),
        asm::addi(2, 0, 1),
        asm::addi(3, 0, 3),
    ];
    let taken = run_program(HazardPolicy::Forwarding, &program, &[]);
    assert_eq!((taken.reg(2), taken.reg(3)), (0, 3));

    let not_taken = run_program(HazardPolicy::Forwarding, &program, &[(0, 9)]);
    assert_eq!((not_taken.reg(1), not_taken.reg(2), not_taken.reg(3)), (9, 1, 3));
}

// ══════════════════════════════════════════════════════════
// 3. Decode bypass for transfers
// ══════════════════════════════════════════════════════════

// The register file still holds 0 for the producer's destination when the
// transfer resolves, so each outcome below is only reachable through a bypass.

#[test]
fn branch_takes_alu_result_from_ex_mem_without_stalling() {
    // addi x1, x0, 5 ; bne x1, x0, +8 ; addi x2, x0, 1 ; addi x3, x0, 3
    let program = [
        asm::addi(1, 0, 5),
        asm::bne(1, 0, 8),
        asm::addi(2, 0, 1),
        asm::addi(3, 0, 3),
    ];
    let fwd = run_program(HazardPolicy::Forwarding, &program, &[]);
    assert_eq!((fwd.reg(1), fwd.reg(2), fwd.reg(3)), (5, 0, 3));
    assert_eq!(fwd.sim.stats().stalls_data, 0);
    assert_eq!(fwd.sim.stats().stalls_control, 1);
    assert!(fwd.sim.stats().forwards >= 1);
    assert_eq!(fwd.sim.stats().cycles, 8);

    let stall = run_program(HazardPolicy::Stall, &program, &[]);
    assert_eq!((stall.reg(1), stall.reg(2), stall.reg(3)), (5, 0, 3));
    assert_eq!(stall.sim.stats().stalls_data, 2);
    assert_eq!(stall.sim.stats().forwards, 0);
    assert_eq!(stall.sim.stats().cycles, 10);
}

#[test]
fn branch_takes_alu_result_from_mem_wb_without_stalling() {
    // addi x1, x0, 5 ; addi x4, x0, 4 ; bne x1, x0, +8 ; addi x2, x0, 1 ; addi x3, x0, 3
    let program = [
        asm::addi(1, 0, 5),
        asm::addi(4, 0, 4),
        asm::bne(1, 0, 8),
        asm::addi(2, 0, 1),
        asm::addi(3, 0, 3),
    ];
    let fwd = run_program(HazardPolicy::Forwarding, &program, &[]);
    assert_eq!((fwd.reg(2), fwd.reg(3), fwd.reg(4)), (0, 3, 4));
    assert_eq!(fwd.sim.stats().stalls_data, 0);
    assert_eq!(fwd.sim.stats().cycles, 9);

    let stall = run_program(HazardPolicy::Stall, &program, &[]);
    assert_eq!((stall.reg(2), stall.reg(3)), (0, 3));
    assert_eq!(stall.sim.stats().stalls_data, 1);
    assert_eq!(stall.sim.stats().cycles, 10);
}

#[test]
fn jalr_takes_base_from_ex_mem_without_stalling() {
    // addi x5, x0, 12 ; jalr x1, 0(x5) ; addi x2, x0, 1 ; addi x3, x0, 3
    let program = [
        asm::addi(5, 0, 12),
        asm::jalr(1, 5, 0),
        asm::addi(2, 0, 1),
        asm::addi(3, 0, 3),
    ];
    let fwd = run_program(HazardPolicy::Forwarding, &program, &[]);
    assert_eq!((fwd.reg(1), fwd.reg(2), fwd.reg(3)), (8, 0, 3));
    assert_eq!(fwd.sim.stats().stalls_data, 0);
    assert_eq!(fwd.sim.stats().forwards, 1);
    assert_eq!(fwd.sim.stats().cycles, 8);
}
