//! Pipeline stage implementations.
//!
//! This module contains the five stage functions. The driver calls them in
//! reverse pipeline order each cycle, handing every stage the latches as they
//! stood when the cycle began:
//! 1. **Writeback:** Commits results to the register file.
//! 2. **Memory:** Performs data loads and stores.
//! 3. **Execute:** Forwards operands and runs the ALU.
//! 4. **Decode:** Generates control, detects hazards, resolves branches and jumps.
//! 5. **Fetch:** Reads the next instruction word and assigns its identity.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::{DecodeOutput, decode_stage};
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
