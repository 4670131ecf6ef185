//! ALU Control.
//!
//! Maps the coarse `aluOp` from decode plus the instruction's function codes
//! onto a concrete [`AluOp`]:
//! 1. **Address:** always ADD (loads and stores).
//! 2. **Compare:** always SUB (branches; a zero result means equal).
//! 3. **Funct:** dispatch on funct3, with the funct7 alternate bit choosing SUB
//!    over ADD and SRA over SRL.
//!
//! For register-immediate ADDI the upper immediate bits overlap funct7, so the
//! SUB selector only applies to register-register instructions. SRAI carries
//! the selector in the same bit position, so shifts honor it either way.

use crate::core::pipeline::signals::{AluMode, AluOp};
use crate::isa::rv64i::{funct3, funct7};

/// Selects the ALU operation for an instruction in execute.
///
/// # Arguments
///
/// * `mode` - The coarse `aluOp` field from the control bundle.
/// * `f3` - The instruction's funct3 field.
/// * `f7` - The instruction's funct7 field.
/// * `imm_operand` - Whether operand B is the immediate (`aluSrc`).
pub const fn alu_control(mode: AluMode, f3: u32, f7: u32, imm_operand: bool) -> AluOp {
    let alt = f7 & funct7::ALT_BIT != 0;
    match mode {
        AluMode::Address => AluOp::Add,
        AluMode::Compare => AluOp::Sub,
        AluMode::Funct => match f3 {
            funct3::ADD_SUB if alt && !imm_operand => AluOp::Sub,
            funct3::ADD_SUB => AluOp::Add,
            funct3::SLL => AluOp::Sll,
            funct3::SLT => AluOp::Slt,
            funct3::SLTU => AluOp::Sltu,
            funct3::XOR => AluOp::Xor,
            funct3::SRL_SRA if alt => AluOp::Sra,
            funct3::SRL_SRA => AluOp::Srl,
            funct3::OR => AluOp::Or,
            _ => AluOp::And,
        },
    }
}
