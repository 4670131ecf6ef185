//! RISC-V Instruction Decoder.
//!
//! This module turns a 32-bit encoding into the structured `Decoded` form. It
//! performs:
//! 1. **Field Extraction:** Opcode, register indices, funct3 and funct7.
//! 2. **Classification:** Maps the opcode onto the modeled instruction classes.
//! 3. **Immediate Generation:** Reassembles and sign-extends the I, S, B, U and
//!    J immediates. Unrecognized opcodes carry a zero immediate.

use crate::isa::instruction::{Decoded, InstrClass, InstructionBits};
use crate::isa::rv64i::opcodes;

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Width of the I-type and S-type immediates.
const IMM12_BITS: u32 = 12;

/// Width of the B-type immediate (bit 0 implied zero).
const B_IMM_BITS: u32 = 13;

/// Width of the J-type immediate (bit 0 implied zero).
const J_IMM_BITS: u32 = 21;

/// Bit mask for the U-type immediate field (bits 12-31, kept in place).
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Immediate layout used by an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmFormat {
    /// `imm[11:0] | rs1 | funct3 | rd | opcode`
    I,
    /// `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
    S,
    /// `imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11] | opcode`
    B,
    /// `imm[31:12] | rd | opcode`
    U,
    /// `imm[20|10:1|11|19:12] | rd | opcode`
    J,
    /// R-type or unrecognized; immediate is zero.
    None,
}

impl ImmFormat {
    /// Selects the immediate layout for a major opcode.
    pub const fn for_opcode(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => Self::I,
            opcodes::OP_STORE => Self::S,
            opcodes::OP_BRANCH => Self::B,
            opcodes::OP_LUI | opcodes::OP_AUIPC => Self::U,
            opcodes::OP_JAL => Self::J,
            _ => Self::None,
        }
    }
}

/// Decodes a RISC-V instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// A `Decoded` structure with the class, register fields, function codes and
/// sign-extended immediate.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();
    Decoded {
        raw: inst,
        opcode,
        class: InstrClass::from_opcode(opcode),
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm: immediate(inst, ImmFormat::for_opcode(opcode)),
    }
}

/// Extracts the sign-extended immediate of `inst` under the given layout.
pub fn immediate(inst: u32, format: ImmFormat) -> i64 {
    match format {
        ImmFormat::I => ((inst as i32) >> 20) as i64,
        ImmFormat::S => {
            let combined = (field(inst, 31, 25) << 5) | field(inst, 11, 7);
            sign_extend(combined, IMM12_BITS)
        }
        ImmFormat::B => {
            let combined = (field(inst, 31, 31) << 12)
                | (field(inst, 7, 7) << 11)
                | (field(inst, 30, 25) << 5)
                | (field(inst, 11, 8) << 1);
            sign_extend(combined, B_IMM_BITS)
        }
        ImmFormat::U => ((inst & U_IMM_MASK) as i32) as i64,
        ImmFormat::J => {
            let combined = (field(inst, 31, 31) << 20)
                | (field(inst, 19, 12) << 12)
                | (field(inst, 20, 20) << 11)
                | (field(inst, 30, 21) << 1);
            sign_extend(combined, J_IMM_BITS)
        }
        ImmFormat::None => 0,
    }
}

/// Extracts bits `hi..=lo` of `inst`, right-aligned.
#[inline(always)]
const fn field(inst: u32, hi: u32, lo: u32) -> u32 {
    (inst >> lo) & ((1u32 << (hi - lo + 1)) - 1)
}

/// Sign extends a value of `bits` width to a 64-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
const fn sign_extend(val: u32, bits: u32) -> i64 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val as i32) << shift >> shift) as i64
}
