//! RISC-V General-Purpose Register File.
//!
//! This module implements the integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Introspection:** Exposes the full register state for final-state reporting.

use crate::common::constants::NUM_GPRS;

/// General-Purpose Register file.
///
/// Register `x0` is hardwired to zero and cannot be modified. Values are held as
/// raw 64-bit patterns; signed interpretation belongs to the ALU.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u64; NUM_GPRS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 64-bit value stored in the register. Register `x0` always returns 0.
    pub fn read(&self, idx: usize) -> u64 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register. Writes to `x0` are dropped.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 64-bit value to write.
    pub fn write(&mut self, idx: usize, val: u64) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all 32 registers, `x0` included.
    pub const fn snapshot(&self) -> [u64; NUM_GPRS] {
        self.regs
    }

    /// Resets every register to zero.
    pub fn clear(&mut self) {
        self.regs = [0; NUM_GPRS];
    }
}
