//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes ADD from SUB and SRL from SRA.
//! For RV64 immediate shifts the same bit (instruction bit 30) sits in the top of
//! the immediate, so decode tests only [`ALT_BIT`].

/// Default operation (ADD, SRL, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA).
pub const SUB: u32 = 0b0100000;

/// Alias for SUB (used for Shift Right Arithmetic).
pub const SRA: u32 = 0b0100000;

/// The single funct7 bit that selects the alternate operation.
pub const ALT_BIT: u32 = 0b0100000;
