//! Program Counter and Branch-Target Controller.
//!
//! The fetch address is mutated exactly once per cycle, here. The controller
//! applies one uniform rule to every redirect: the decode stage hands it a
//! signed delta from the current address, which covers PC-relative branches,
//! JAL and register-indirect JALR alike.

use crate::common::constants::INSTRUCTION_SIZE;

/// Holds the address of the next fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgramCounter {
    addr: u64,
}

impl ProgramCounter {
    /// Creates a controller pointing at `addr`.
    pub const fn new(addr: u64) -> Self {
        Self { addr }
    }

    /// Current fetch address.
    pub const fn current(&self) -> u64 {
        self.addr
    }

    /// Computes the delta that takes the current address to `target`.
    pub const fn delta_to(&self, target: u64) -> i64 {
        target.wrapping_sub(self.addr) as i64
    }

    /// Produces the next fetch address.
    ///
    /// # Arguments
    ///
    /// * `stall` - Hold the address unchanged.
    /// * `redirect` - Signed delta of a taken branch or jump, if any.
    pub const fn advance(&mut self, stall: bool, redirect: Option<i64>) {
        if !stall {
            self.addr = match redirect {
                Some(delta) => self.addr.wrapping_add_signed(delta),
                None => self.addr.wrapping_add(INSTRUCTION_SIZE),
            };
        }
    }

    /// Resets the fetch address to zero.
    pub const fn reset(&mut self) {
        self.addr = 0;
    }
}
