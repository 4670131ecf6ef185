//! Global System Constants.
//!
//! This module defines constants used by the decoder, the register file and the
//! pipeline driver. It includes:
//! 1. **Instruction Constants:** Width of a fetched word.
//! 2. **Register Constants:** Size of the integer register file.
//! 3. **Address Constants:** Masks applied to computed jump targets.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Number of integer general-purpose registers.
pub const NUM_GPRS: usize = 32;

/// Mask clearing bit 0 of a computed JALR target.
pub const JALR_TARGET_MASK: u64 = !1;
