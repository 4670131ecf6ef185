//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage and the
//! control logic that picks its operation.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra
//! - [`control`]:    `{aluOp, funct3, funct7}` to [`AluOp`] selection

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// ALU operation selection.
pub mod control;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand.
    /// * `b`  - Second operand, also the shift amount.
    ///
    /// # Returns
    ///
    /// The 64-bit result of the ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpipe_core::core::units::alu::Alu;
    /// use rvpipe_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 4), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i64 as u64, 10), 1);
    /// ```
    pub const fn execute(op: AluOp, a: u64, b: u64) -> u64 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
