//! Whole-Program Scenarios.
//!
//! Cycle counts and final state for short programs under both policies.

use pretty_assertions::assert_eq;
use rstest::rstest;

use rvpipe_core::sim::RunOutcome;
use rvpipe_core::{Config, HazardPolicy, Simulator};

use crate::common::builder::instruction::asm;
use crate::common::harness::{TestContext, run_program};

#[rstest]
#[case::alu_forwarding(HazardPolicy::Forwarding, 6)]
#[case::alu_stall(HazardPolicy::Stall, 8)]
fn addi_then_dependent_add(#[case] policy: HazardPolicy, #[case] cycles: u64) {
    let ctx = run_program(policy, &[asm::addi(5, 0, 5), asm::add(6, 5, 5)], &[]);
    assert_eq!(ctx.reg(5), 5);
    assert_eq!(ctx.reg(6), 10);
    assert_eq!(ctx.sim.stats().cycles, cycles);
}

#[rstest]
#[case::load_forwarding(HazardPolicy::Forwarding, 7)]
#[case::load_stall(HazardPolicy::Stall, 8)]
fn load_then_dependent_add(#[case] policy: HazardPolicy, #[case] cycles: u64) {
    let ctx = run_program(policy, &[asm::lw(5, 0, 0), asm::add(6, 5, 5)], &[(0, 7)]);
    assert_eq!(ctx.reg(6), 14);
    assert_eq!(ctx.sim.stats().cycles, cycles);
}

#[test]
fn empty_program_runs_zero_cycles() {
    let mut sim = Simulator::new(&Config::default());
    sim.load(&[]);
    let summary = sim.run();
    assert_eq!(summary.cycles, 0);
    assert_eq!(summary.outcome, RunOutcome::Drained);
}

#[test]
fn single_instruction_takes_five_cycles() {
    let ctx = run_program(HazardPolicy::Forwarding, &[asm::addi(1, 0, 1)], &[]);
    assert_eq!(ctx.sim.stats().cycles, 5);
    assert_eq!(ctx.sim.stats().cpi(), 5.0);
}

#[test]
fn independent_stream_retires_one_per_cycle() {
    let program: Vec<u32> = (1..=10).map(|r| asm::addi(r, 0, r as i32)).collect();
    for policy in HazardPolicy::ALL {
        let ctx = run_program(policy, &program, &[]);
        assert_eq!(ctx.sim.stats().cycles, 14, "{policy}");
        assert_eq!(ctx.sim.stats().stalls_data, 0);
    }
}

#[test]
fn store_then_load_round_trip() {
    // addi x1, x0, 42 ; sw x1, 16(x0) ; lw x2, 16(x0) ; add x3, x2, x1
    let program = [
        asm::addi(1, 0, 42),
        asm::sw(0, 1, 16),
        asm::lw(2, 0, 16),
        asm::add(3, 2, 1),
    ];
    for policy in HazardPolicy::ALL {
        let ctx = run_program(policy, &program, &[]);
        assert_eq!(ctx.mem(16), 42, "{policy}");
        assert_eq!(ctx.reg(3), 84, "{policy}");
    }
}

#[test]
fn doubleword_load_uses_same_cell() {
    let ctx = run_program(
        HazardPolicy::Forwarding,
        &[asm::ld(1, 0, 8), asm::lw(2, 0, 8)],
        &[(8, u64::MAX)],
    );
    assert_eq!(ctx.reg(1), u64::MAX);
    assert_eq!(ctx.reg(2), u64::MAX);
}

#[test]
fn writes_to_x0_are_discarded() {
    let ctx = run_program(
        HazardPolicy::Forwarding,
        &[asm::addi(0, 0, 9), asm::add(1, 0, 0)],
        &[],
    );
    assert_eq!(ctx.reg(0), 0);
    assert_eq!(ctx.reg(1), 0);
}

#[test]
fn unsupported_opcode_flows_as_nop() {
    let ctx = run_program(
        HazardPolicy::Forwarding,
        &[0xFFFF_FFFF, asm::addi(1, 0, 1)],
        &[],
    );
    assert_eq!(ctx.reg(1), 1);
    assert_eq!(ctx.sim.stats().inst_nop, 1);
    assert_eq!(ctx.sim.stats().instructions_retired, 2);
}

#[test]
fn seeded_registers_survive_until_overwritten() {
    let mut ctx = TestContext::new(HazardPolicy::Stall)
        .load(&[asm::add(3, 1, 2)])
        .with_reg(1, 5)
        .with_reg(2, 6);
    let _ = ctx.run();
    assert_eq!(ctx.reg(3), 11);
}

#[test]
fn reload_resets_state() {
    let mut ctx = TestContext::new(HazardPolicy::Forwarding)
        .load(&[asm::addi(1, 0, 1), asm::sw(0, 1, 0)]);
    let _ = ctx.run();
    assert_eq!(ctx.mem(0), 1);

    ctx = ctx.load(&[asm::addi(2, 0, 2)]);
    assert_eq!(ctx.reg(1), 0);
    assert!(ctx.sim.memory().is_empty());
    assert_eq!(ctx.sim.stats().cycles, 0);
    assert!(ctx.cpu().fetch_log().is_empty());
}

#[test]
fn step_stops_when_drained() {
    let mut sim = Simulator::with_policy(HazardPolicy::Forwarding);
    sim.load(&[asm::addi(1, 0, 1)]);
    let first = sim.step(3);
    assert_eq!((first.cycles, first.outcome), (3, RunOutcome::CycleLimit));
    let second = sim.step(100);
    assert_eq!((second.cycles, second.outcome), (2, RunOutcome::Drained));
    assert!(sim.is_drained());
    assert_eq!(sim.step(1).cycles, 0);
    assert_eq!(sim.stats().cycles, 5);
}
