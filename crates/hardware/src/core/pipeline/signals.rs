//! Pipeline control signals and operation types.
//!
//! This module defines the signals that steer an instruction through the
//! pipeline. It performs:
//! 1. **Operation Classification:** The resolved ALU function and the coarse
//!    `aluOp` field that decode hands to execute.
//! 2. **Control Generation:** The per-class control bundle derived purely from
//!    the opcode.
//! 3. **Bubble Representation:** The all-false bundle that empty latches report.

use crate::isa::instruction::InstrClass;

/// Resolved ALU function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Default value; also address generation and return-address computation.
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Shift left logical.
    Sll,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Bitwise XOR.
    Xor,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,
}

/// Coarse ALU control produced by decode (`aluOp`).
///
/// The discriminants match the two-bit encoding used by textbook control units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AluMode {
    /// Force ADD (load/store address computation).
    #[default]
    Address = 0,

    /// Force SUB (branch comparison, zero means equal).
    Compare = 1,

    /// Dispatch on funct3/funct7.
    Funct = 2,
}

/// Control signals generated by the decode stage.
///
/// The default value is the no-op bundle carried by bubbles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Write the result back to `rd`.
    pub reg_write: bool,
    /// Select load data instead of the ALU result at write-back.
    pub mem_to_reg: bool,
    /// Read data memory at the ALU result.
    pub mem_read: bool,
    /// Write the second operand to data memory at the ALU result.
    pub mem_write: bool,
    /// Use the immediate as ALU operand B.
    pub alu_src: bool,
    /// Coarse ALU operation.
    pub alu_op: AluMode,
    /// Conditional branch, resolved in decode.
    pub branch: bool,
    /// JAL or JALR: operands are overridden to `(pc, 4)`.
    pub jump: bool,
}

impl ControlSignals {
    /// The no-operation bundle.
    pub const NOP: Self = Self {
        reg_write: false,
        mem_to_reg: false,
        mem_read: false,
        mem_write: false,
        alu_src: false,
        alu_op: AluMode::Address,
        branch: false,
        jump: false,
    };

    /// Derives the control bundle for an instruction class.
    ///
    /// Unsupported opcodes receive [`ControlSignals::NOP`].
    pub const fn for_class(class: InstrClass) -> Self {
        match class {
            InstrClass::RType => Self {
                reg_write: true,
                alu_op: AluMode::Funct,
                ..Self::NOP
            },
            InstrClass::IType => Self {
                reg_write: true,
                alu_src: true,
                alu_op: AluMode::Funct,
                ..Self::NOP
            },
            InstrClass::Load => Self {
                reg_write: true,
                alu_src: true,
                mem_read: true,
                mem_to_reg: true,
                ..Self::NOP
            },
            InstrClass::Store => Self {
                mem_write: true,
                alu_src: true,
                ..Self::NOP
            },
            InstrClass::Branch => Self {
                alu_op: AluMode::Compare,
                branch: true,
                ..Self::NOP
            },
            InstrClass::Jal | InstrClass::Jalr => Self {
                reg_write: true,
                jump: true,
                ..Self::NOP
            },
            InstrClass::Unsupported => Self::NOP,
        }
    }
}
