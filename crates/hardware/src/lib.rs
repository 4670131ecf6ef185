//! Cycle-accurate five-stage pipelined RISC-V core.
//!
//! This crate models a classic in-order IF/ID/EX/MEM/WB pipeline over a small
//! RV64I integer subset:
//! 1. **Core:** Latches, stages, hazard detection, forwarding and the PC controller.
//! 2. **ISA:** Field extraction, immediate generation and disassembly.
//! 3. **Memory:** A read-only program image and a sparse 64-bit data memory.
//! 4. **Simulation:** Program loading, run control, diagrams and statistics.
//!
//! Two hazard policies are provided. Stall-only resolves every read-after-write
//! hazard by stalling; forwarding bypasses results and stalls only for a load
//! followed by a dependent instruction. Both produce identical architectural
//! state for the same program.
//!
//! ```
//! use rvpipe_core::{Config, Simulator};
//!
//! let mut sim = Simulator::new(&Config::default());
//! // addi x5, x0, 5 ; add x6, x5, x5
//! sim.load(&[0x0050_0293, 0x0052_8333]);
//! let summary = sim.run();
//! assert_eq!(summary.cycles, 6);
//! assert_eq!(sim.registers().read(6), 10);
//! ```

/// Constants and error types.
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU core (architectural state, execution units, pipeline).
pub mod core;
/// Instruction set (field extraction, immediates, disassembly).
pub mod isa;
/// Program loading, run control and reporting.
pub mod sim;
/// Program image and data memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Core state and the per-cycle driver.
pub use crate::core::Cpu;
/// Hazard-resolution strategy.
pub use crate::core::pipeline::hazards::HazardPolicy;
/// Top-level simulator.
pub use crate::sim::Simulator;
