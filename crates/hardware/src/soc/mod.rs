//! Memories attached to the core.
//!
//! The core sees two stores: a read-only program image addressed by the fetch
//! stage, and a sparse data memory touched only by the memory stage.

/// Program image and data memory.
pub mod memory;

pub use memory::{DataMemory, ProgramImage};
