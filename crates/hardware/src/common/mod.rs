//! Common definitions shared across the simulator.
//!
//! This module provides the pieces every other layer depends on:
//! 1. **Constants:** Instruction width, register-file size, and address masks.
//! 2. **Errors:** Load-time and configuration failures surfaced before a run starts.

/// Architectural and simulation constants.
pub mod constants;

/// Error types for program loading and configuration.
pub mod error;

pub use self::error::{ConfigError, LoadError};
