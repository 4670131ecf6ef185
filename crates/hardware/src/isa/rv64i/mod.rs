//! RISC-V Base Integer Instruction Set (I).
//!
//! Encodings for the integer subset the pipeline models.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, Store, Branch, Jal, Jalr, OpImm, OpReg).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits selecting SUB and SRA.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
