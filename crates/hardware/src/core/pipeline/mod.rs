//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Hazards:** The hazard policy, stall detection and the per-cycle flow verdict.
//! 2. **Forwarding:** Operand bypass from EX/MEM and MEM/WB.
//! 3. **Latches:** Inter-stage buffers carrying identity, data and control.
//! 4. **Signals:** Control signals generated during instruction decoding.
//! 5. **Stages:** Fetch, Decode, Execute, Memory, and Writeback.
//! 6. **Trace:** Stage occupancy reporting for external renderers.
//! 7. **Traits:** Common interface over the latches.

/// Operand forwarding unit.
pub mod forwarding;

/// Pipeline hazard detection and flow control.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Stage occupancy reports and the trace sink interface.
pub mod trace;

/// Traits for pipeline latches.
pub mod traits;
