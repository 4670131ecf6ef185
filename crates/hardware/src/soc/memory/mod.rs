//! Memory Stores.
//!
//! This module implements both memories of the modeled core. It provides:
//! 1. **Program Image:** An ordered sequence of instruction words fetched by address.
//! 2. **Data Memory:** A sparse map of 64-bit words keyed by address, zero when unmapped.

/// Sparse data memory.
pub mod data;

/// Read-only instruction store.
pub mod program;

pub use self::data::DataMemory;
pub use self::program::ProgramImage;
