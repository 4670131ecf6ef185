//! RISC-V instruction set support for the modeled integer subset.
//!
//! This module covers everything the pipeline needs to understand a raw
//! instruction word. It provides:
//! 1. **Fields:** Bit extraction from 32-bit encodings and instruction classes.
//! 2. **Decode:** Immediate generation for the I, S, B, U and J formats.
//! 3. **Encodings:** Opcode and function-code constants for RV64I.
//! 4. **Disassembly:** Assembler-syntax rendering for diagrams and logs.

/// Instruction decoder (classification and immediate generation).
pub mod decode;

/// Disassembler for the modeled subset.
pub mod disasm;

/// Instruction field extraction, classes, and the decoded record.
pub mod instruction;

/// RV64I base integer encodings.
pub mod rv64i;
