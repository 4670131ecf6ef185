//! Operand Forwarding Priority.

use rvpipe_core::core::pipeline::forwarding::{ForwardSource, forward_operand, forward_rs};
use rvpipe_core::core::pipeline::latches::{ExMem, ExMemEntry, IdExEntry, MemWb, MemWbEntry};
use rvpipe_core::core::pipeline::signals::ControlSignals;
use rvpipe_core::isa::instruction::InstrClass;

fn ex_mem(class: InstrClass, rd: usize, alu: u64) -> ExMem {
    ExMem {
        entry: Some(ExMemEntry {
            rd,
            alu,
            ctrl: ControlSignals::for_class(class),
            ..Default::default()
        }),
    }
}

fn mem_wb(class: InstrClass, rd: usize, alu: u64, load_data: u64) -> MemWb {
    MemWb {
        entry: Some(MemWbEntry {
            rd,
            alu,
            load_data,
            ctrl: ControlSignals::for_class(class),
            ..Default::default()
        }),
    }
}

#[test]
fn register_file_when_nothing_matches() {
    let op = forward_operand(3, 42, &ex_mem(InstrClass::RType, 4, 1), &MemWb::default());
    assert_eq!((op.value, op.source), (42, ForwardSource::RegFile));
    assert!(!op.is_forwarded());
}

#[test]
fn ex_mem_beats_mem_wb() {
    let op = forward_operand(
        5,
        0,
        &ex_mem(InstrClass::RType, 5, 100),
        &mem_wb(InstrClass::RType, 5, 200, 0),
    );
    assert_eq!((op.value, op.source), (100, ForwardSource::ExMem));
}

#[test]
fn load_in_ex_mem_is_skipped() {
    let op = forward_operand(
        5,
        0,
        &ex_mem(InstrClass::Load, 5, 0x80),
        &mem_wb(InstrClass::RType, 5, 200, 0),
    );
    assert_eq!((op.value, op.source), (200, ForwardSource::MemWb));
}

#[test]
fn mem_wb_load_forwards_loaded_data() {
    let op = forward_operand(5, 0, &ExMem::default(), &mem_wb(InstrClass::Load, 5, 0x80, 7));
    assert_eq!((op.value, op.source), (7, ForwardSource::MemWb));
}

#[test]
fn non_writing_producers_never_forward() {
    let op = forward_operand(
        5,
        9,
        &ex_mem(InstrClass::Store, 5, 1),
        &mem_wb(InstrClass::Branch, 5, 2, 0),
    );
    assert_eq!(op.value, 9);
}

#[test]
fn x0_never_forwards() {
    let op = forward_operand(0, 0, &ex_mem(InstrClass::RType, 0, 99), &MemWb::default());
    assert_eq!((op.value, op.source), (0, ForwardSource::RegFile));
}

#[test]
fn forward_rs_handles_both_operands() {
    let entry = IdExEntry {
        rs1: 1,
        rs2: 2,
        rv1: 10,
        rv2: 20,
        ..Default::default()
    };
    let (a, b) = forward_rs(&entry, &ex_mem(InstrClass::IType, 2, 22), &MemWb::default());
    assert_eq!((a.value, a.source), (10, ForwardSource::RegFile));
    assert_eq!((b.value, b.source), (22, ForwardSource::ExMem));
}
