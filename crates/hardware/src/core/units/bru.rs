//! Branch Resolution Unit.
//!
//! Branches and jumps resolve in decode, one stage earlier than the ALU could
//! resolve them, so the shadow of a taken transfer is a single instruction.
//! This unit evaluates conditions and computes targets; the decode stage
//! converts a target into a PC delta.

use crate::common::constants::JALR_TARGET_MASK;
use crate::isa::rv64i::funct3;

/// Branch condition evaluation and target computation.
#[derive(Debug)]
pub struct BranchUnit;

impl BranchUnit {
    /// Evaluates a conditional branch.
    ///
    /// # Arguments
    ///
    /// * `f3` - Branch funct3 (BEQ, BNE, BLT, BGE, BLTU, BGEU).
    /// * `a` - Value of `rs1`.
    /// * `b` - Value of `rs2`.
    ///
    /// # Returns
    ///
    /// `true` when the branch is taken. Reserved encodings never take.
    pub const fn taken(f3: u32, a: u64, b: u64) -> bool {
        match f3 {
            funct3::BEQ => a == b,
            funct3::BNE => a != b,
            funct3::BLT => (a as i64) < (b as i64),
            funct3::BGE => (a as i64) >= (b as i64),
            funct3::BLTU => a < b,
            funct3::BGEU => a >= b,
            _ => false,
        }
    }

    /// Target of a PC-relative transfer (branches and JAL).
    pub const fn relative_target(pc: u64, imm: i64) -> u64 {
        pc.wrapping_add_signed(imm)
    }

    /// Target of JALR: `(rs1 + imm) & !1`.
    pub const fn register_target(base: u64, imm: i64) -> u64 {
        base.wrapping_add_signed(imm) & JALR_TARGET_MASK
    }
}
