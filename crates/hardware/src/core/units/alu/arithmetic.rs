//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap modulo 2^64, matching two's-complement
//! register semantics.

use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Returns
///
/// The 64-bit result, or `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
