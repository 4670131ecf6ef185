//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA). Shift amounts are masked to 6 bits (0-63),
//! so an I-type shift whose immediate carries the SRA selector bit still
//! shifts by its low six bits.

use crate::core::pipeline::signals::AluOp;

/// Bit mask for shift amount in RV64 (6 bits: 0-63).
pub const SHAMT_MASK: u64 = 0x3f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (lower 6 bits used).
///
/// # Returns
///
/// The 64-bit result, or `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    let sh = (b & SHAMT_MASK) as u32;
    match op {
        AluOp::Sll => a << sh,
        AluOp::Srl => a >> sh,
        AluOp::Sra => ((a as i64) >> sh) as u64,
        _ => 0,
    }
}
