//! Execute Stage.

use rvpipe_core::core::Cpu;
use rvpipe_core::core::pipeline::hazards::HazardPolicy;
use rvpipe_core::core::pipeline::latches::{ExMem, ExMemEntry, IdEx, IdExEntry, Latches};
use rvpipe_core::core::pipeline::signals::ControlSignals;
use rvpipe_core::core::pipeline::stages::execute_stage;
use rvpipe_core::isa::decode::decode;
use rvpipe_core::isa::instruction::InstrClass;

use crate::common::builder::instruction::asm;

fn id_ex_for(inst: u32, pc: u64, rv1: u64, rv2: u64) -> IdExEntry {
    let d = decode(inst);
    let ctrl = ControlSignals::for_class(d.class);
    IdExEntry {
        pc,
        inst,
        rs1: d.rs1,
        rs2: d.rs2,
        rd: d.rd,
        imm: d.imm,
        rv1,
        rv2,
        funct3: d.funct3,
        funct7: d.funct7,
        ctrl,
        ..Default::default()
    }
}

fn producer(rd: usize, alu: u64) -> ExMem {
    ExMem {
        entry: Some(ExMemEntry {
            rd,
            alu,
            ctrl: ControlSignals::for_class(InstrClass::IType),
            ..Default::default()
        }),
    }
}

#[test]
fn immediate_operand_for_itype() {
    let mut cpu = Cpu::new(HazardPolicy::Forwarding);
    let prev = Latches {
        id_ex: IdEx { entry: Some(id_ex_for(asm::addi(1, 2, -5), 0, 10, 0)) },
        ..Latches::default()
    };
    execute_stage(&mut cpu, &prev);
    assert_eq!(cpu.latches.ex_mem.entry.map(|e| e.alu), Some(5));
}

#[test]
fn forwarding_policy_replaces_stale_read() {
    let mut cpu = Cpu::new(HazardPolicy::Forwarding);
    let prev = Latches {
        id_ex: IdEx { entry: Some(id_ex_for(asm::add(3, 1, 2), 0, 0, 4)) },
        ex_mem: producer(1, 100),
        ..Latches::default()
    };
    execute_stage(&mut cpu, &prev);
    assert_eq!(cpu.latches.ex_mem.entry.map(|e| e.alu), Some(104));
    assert_eq!(cpu.stats.forwards, 1);
}

#[test]
fn stall_policy_never_forwards() {
    let mut cpu = Cpu::new(HazardPolicy::Stall);
    let prev = Latches {
        id_ex: IdEx { entry: Some(id_ex_for(asm::add(3, 1, 2), 0, 0, 4)) },
        ex_mem: producer(1, 100),
        ..Latches::default()
    };
    execute_stage(&mut cpu, &prev);
    assert_eq!(cpu.latches.ex_mem.entry.map(|e| e.alu), Some(4));
    assert_eq!(cpu.stats.forwards, 0);
}

#[test]
fn store_data_is_forwarded_second_operand() {
    let mut cpu = Cpu::new(HazardPolicy::Forwarding);
    let prev = Latches {
        id_ex: IdEx { entry: Some(id_ex_for(asm::sw(0, 7, 16), 0, 0, 1)) },
        ex_mem: producer(7, 0xABC),
        ..Latches::default()
    };
    execute_stage(&mut cpu, &prev);
    let out = cpu.latches.ex_mem.entry.unwrap_or_default();
    assert_eq!((out.alu, out.store_data), (16, 0xABC));
}

#[test]
fn jump_computes_return_address() {
    let mut cpu = Cpu::new(HazardPolicy::Forwarding);
    let mut entry = id_ex_for(asm::jal(1, 64), 12, 12, 4);
    entry.rs1 = 0;
    entry.rs2 = 0;
    let prev = Latches {
        id_ex: IdEx { entry: Some(entry) },
        ex_mem: producer(1, 999),
        ..Latches::default()
    };
    execute_stage(&mut cpu, &prev);
    assert_eq!(cpu.latches.ex_mem.entry.map(|e| e.alu), Some(16));
}
