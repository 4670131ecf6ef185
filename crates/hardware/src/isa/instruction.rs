//! Instruction encoding and decoding utilities.
//!
//! Provides the field-extraction trait for raw 32-bit encodings, the
//! instruction classes the pipeline distinguishes, and the `Decoded` record
//! produced by the decoder.

use crate::isa::rv64i::opcodes;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask normalizing any register index field to 5 bits.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Bit position of the destination register field.
const RD_SHIFT: u32 = 7;
/// Bit position of the funct3 field.
const FUNCT3_SHIFT: u32 = 12;
/// Bit position of the first source register field.
const RS1_SHIFT: u32 = 15;
/// Bit position of the second source register field.
const RS2_SHIFT: u32 = 20;
/// Bit position of the funct7 field.
const FUNCT7_SHIFT: u32 = 25;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Register indices are normalized with a direct 5-bit mask.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Distinguishes operations within one opcode (BEQ vs BNE, ADD vs SLT).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Selects the alternate encoding of ADD/SUB and SRL/SRA.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// Instruction classes modeled by the pipeline, selected by opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstrClass {
    /// Register-register arithmetic and logic (`OP`).
    RType,
    /// Register-immediate arithmetic and logic (`OP-IMM`).
    IType,
    /// Memory load.
    Load,
    /// Memory store.
    Store,
    /// Conditional branch.
    Branch,
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// Any opcode outside the modeled subset; executes as a no-op.
    Unsupported,
}

impl InstrClass {
    /// Classifies a 7-bit major opcode.
    pub const fn from_opcode(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_REG => Self::RType,
            opcodes::OP_IMM => Self::IType,
            opcodes::OP_LOAD => Self::Load,
            opcodes::OP_STORE => Self::Store,
            opcodes::OP_BRANCH => Self::Branch,
            opcodes::OP_JAL => Self::Jal,
            opcodes::OP_JALR => Self::Jalr,
            _ => Self::Unsupported,
        }
    }

    /// Whether the class reads `rs1`.
    pub const fn reads_rs1(self) -> bool {
        !matches!(self, Self::Jal | Self::Unsupported)
    }

    /// Whether the class reads `rs2`.
    pub const fn reads_rs2(self) -> bool {
        matches!(self, Self::RType | Self::Store | Self::Branch)
    }

    /// Whether the class redirects the fetch stream from decode.
    pub const fn is_control_flow(self) -> bool {
        matches!(self, Self::Branch | Self::Jal | Self::Jalr)
    }
}

/// Fully decoded instruction fields.
///
/// Produced once per trip through decode; the immediate is never cached
/// across instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit encoding.
    pub raw: u32,
    /// Major opcode (bits 0-6).
    pub opcode: u32,
    /// Class selected by the opcode.
    pub class: InstrClass,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Minor opcode (bits 12-14).
    pub funct3: u32,
    /// Alternate-operation selector (bits 25-31).
    pub funct7: u32,
    /// Sign-extended immediate for the encoding's format, zero if none applies.
    pub imm: i64,
}

impl Decoded {
    /// Source registers this instruction actually reads, `None` for unused slots.
    ///
    /// Only used slots take part in hazard detection, so a JAL whose bits
    /// happen to alias a busy register never stalls.
    pub const fn sources(&self) -> [Option<usize>; 2] {
        [
            if self.class.reads_rs1() { Some(self.rs1) } else { None },
            if self.class.reads_rs2() { Some(self.rs2) } else { None },
        ]
    }
}
