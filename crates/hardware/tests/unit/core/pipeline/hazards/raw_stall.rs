//! Stall-Only Read-After-Write Detection.
//!
//! Without forwarding, decode waits until every producer of its sources has
//! left execute and memory. The register file is written before decode reads
//! it, so a producer in write-back is already visible.

use pretty_assertions::assert_eq;

use rvpipe_core::core::pipeline::hazards::{HazardPolicy, need_stall_raw};
use rvpipe_core::core::pipeline::latches::{ExMem, ExMemEntry, IdEx, IdExEntry};
use rvpipe_core::core::pipeline::signals::ControlSignals;
use rvpipe_core::isa::instruction::InstrClass;

use crate::common::builder::instruction::asm;
use crate::common::harness::run_program;

fn producer_in_ex(class: InstrClass, rd: usize) -> IdEx {
    IdEx {
        entry: Some(IdExEntry {
            rd,
            ctrl: ControlSignals::for_class(class),
            ..Default::default()
        }),
    }
}

fn producer_in_mem(class: InstrClass, rd: usize) -> ExMem {
    ExMem {
        entry: Some(ExMemEntry {
            rd,
            ctrl: ControlSignals::for_class(class),
            ..Default::default()
        }),
    }
}

#[test]
fn stalls_on_producer_in_execute() {
    let id_ex = producer_in_ex(InstrClass::IType, 5);
    assert!(need_stall_raw([Some(5), None], &id_ex, &ExMem::default()));
}

#[test]
fn stalls_on_producer_in_memory() {
    let ex_mem = producer_in_mem(InstrClass::Load, 5);
    assert!(need_stall_raw([None, Some(5)], &IdEx::default(), &ex_mem));
}

#[test]
fn ignores_store_and_branch_in_flight() {
    let id_ex = producer_in_ex(InstrClass::Store, 5);
    let ex_mem = producer_in_mem(InstrClass::Branch, 5);
    assert!(!need_stall_raw([Some(5), Some(5)], &id_ex, &ex_mem));
}

#[test]
fn ignores_x0() {
    let id_ex = producer_in_ex(InstrClass::RType, 0);
    assert!(!need_stall_raw([Some(0), Some(0)], &id_ex, &ExMem::default()));
}

#[test]
fn stall_policy_uses_raw_check() {
    let id_ex = producer_in_ex(InstrClass::RType, 3);
    assert!(HazardPolicy::Stall.must_stall([Some(3), None], &id_ex, &ExMem::default()));
    assert!(!HazardPolicy::Forwarding.must_stall([Some(3), None], &id_ex, &ExMem::default()));
}

#[test]
fn back_to_back_dependency_costs_two_stalls() {
    let program = [asm::addi(5, 0, 5), asm::add(6, 5, 5)];

    let stall = run_program(HazardPolicy::Stall, &program, &[]);
    assert_eq!(stall.reg(6), 10);
    assert_eq!(stall.sim.stats().cycles, 8);
    assert_eq!(stall.sim.stats().stalls_data, 2);

    let fwd = run_program(HazardPolicy::Forwarding, &program, &[]);
    assert_eq!(fwd.reg(6), 10);
    assert_eq!(fwd.sim.stats().cycles, 6);
    assert_eq!(fwd.sim.stats().stalls_data, 0);
}

#[test]
fn dependency_two_apart_costs_one_stall() {
    let program = [asm::addi(5, 0, 5), asm::addi(7, 0, 1), asm::add(6, 5, 5)];
    let ctx = run_program(HazardPolicy::Stall, &program, &[]);
    assert_eq!(ctx.reg(6), 10);
    assert_eq!(ctx.sim.stats().stalls_data, 1);
}

#[test]
fn dependency_three_apart_is_free() {
    let program = [
        asm::addi(5, 0, 5),
        asm::addi(7, 0, 1),
        asm::addi(8, 0, 2),
        asm::add(6, 5, 0),
    ];
    let ctx = run_program(HazardPolicy::Stall, &program, &[]);
    assert_eq!(ctx.reg(6), 5);
    assert_eq!(ctx.sim.stats().stalls_data, 0);
    assert_eq!(ctx.sim.stats().cycles, 8);
}
