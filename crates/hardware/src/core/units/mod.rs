//! Execution units.
//!
//! This module contains the combinational units the pipeline stages call into:
//! 1. **ALU:** Integer arithmetic, logic and shifts, plus operation selection.
//! 2. **BRU:** Branch condition evaluation and jump target computation.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit used by the decode stage.
pub mod bru;
