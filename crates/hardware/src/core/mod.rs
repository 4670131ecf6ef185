//! Core processor implementation.
//!
//! This module contains the five-stage pipelined core: architectural state,
//! the pipeline latches and stages, the execution units, and the `Cpu` that
//! ties them together one cycle at a time.

/// Architectural state (register file, program counter).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, forwarding, signals).
pub mod pipeline;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::cpu::Cpu;
