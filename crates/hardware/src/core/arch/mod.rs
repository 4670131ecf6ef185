//! RISC-V architectural state.
//!
//! This module holds the state a program can observe:
//! 1. **GPRs:** The 32-entry integer register file with `x0` hardwired to zero.
//! 2. **PC:** The fetch address and the controller that advances or redirects it.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Program counter and branch-target controller.
pub mod pc;
