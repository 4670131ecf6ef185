//! Instruction Disassembler for the modeled RV64I subset.
//!
//! Converts a 32-bit encoding into assembler syntax for pipeline diagrams,
//! trace events and test diagnostics. Registers print by index (`x5`) since
//! program listings for this core are written that way.
//!
//! # Usage
//!
//! ```
//! use rvpipe_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00500293), "addi x5, x0, 5");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::InstrClass;
use crate::isa::rv64i::{funct3 as f3, funct7 as f7};

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns `unknown 0x........` for encodings outside the modeled subset.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    let d = decode(inst);
    let alt = d.funct7 & f7::ALT_BIT != 0;

    match d.class {
        InstrClass::RType => {
            let name = match (d.funct3, alt) {
                (f3::ADD_SUB, false) => "add",
                (f3::ADD_SUB, true) => "sub",
                (f3::SLL, _) => "sll",
                (f3::SLT, _) => "slt",
                (f3::SLTU, _) => "sltu",
                (f3::XOR, _) => "xor",
                (f3::SRL_SRA, false) => "srl",
                (f3::SRL_SRA, true) => "sra",
                (f3::OR, _) => "or",
                _ => "and",
            };
            format!("{name} x{}, x{}, x{}", d.rd, d.rs1, d.rs2)
        }
        InstrClass::IType => {
            let (name, imm) = match (d.funct3, alt) {
                (f3::ADD_SUB, _) => ("addi", d.imm),
                (f3::SLL, _) => ("slli", d.imm & 0x3f),
                (f3::SLT, _) => ("slti", d.imm),
                (f3::SLTU, _) => ("sltiu", d.imm),
                (f3::XOR, _) => ("xori", d.imm),
                (f3::SRL_SRA, false) => ("srli", d.imm & 0x3f),
                (f3::SRL_SRA, true) => ("srai", d.imm & 0x3f),
                (f3::OR, _) => ("ori", d.imm),
                _ => ("andi", d.imm),
            };
            format!("{name} x{}, x{}, {imm}", d.rd, d.rs1)
        }
        InstrClass::Load => {
            let name = match d.funct3 {
                f3::LB => "lb",
                f3::LH => "lh",
                f3::LW => "lw",
                f3::LD => "ld",
                f3::LBU => "lbu",
                f3::LHU => "lhu",
                f3::LWU => "lwu",
                _ => return unknown(inst),
            };
            format!("{name} x{}, {}(x{})", d.rd, d.imm, d.rs1)
        }
        InstrClass::Store => {
            let name = match d.funct3 {
                f3::SB => "sb",
                f3::SH => "sh",
                f3::SW => "sw",
                f3::SD => "sd",
                _ => return unknown(inst),
            };
            format!("{name} x{}, {}(x{})", d.rs2, d.imm, d.rs1)
        }
        InstrClass::Branch => {
            let name = match d.funct3 {
                f3::BEQ => "beq",
                f3::BNE => "bne",
                f3::BLT => "blt",
                f3::BGE => "bge",
                f3::BLTU => "bltu",
                f3::BGEU => "bgeu",
                _ => return unknown(inst),
            };
            format!("{name} x{}, x{}, {}", d.rs1, d.rs2, d.imm)
        }
        InstrClass::Jal => format!("jal x{}, {}", d.rd, d.imm),
        InstrClass::Jalr => format!("jalr x{}, {}(x{})", d.rd, d.imm, d.rs1),
        InstrClass::Unsupported => unknown(inst),
    }
}

fn unknown(inst: u32) -> String {
    format!("unknown {inst:#010x}")
}
