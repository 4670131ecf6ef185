//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline values for every field, so `{}` is a complete config.
//! 2. **Structures:** General run control, pipeline policy, and initial memory.
//! 3. **Loading:** JSON parsing from strings and files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;
pub use crate::core::pipeline::hazards::HazardPolicy;

/// Default configuration constants for the simulator.
mod defaults {
    /// Cycle bound used by `Simulator::run` (safety valve for non-terminating programs).
    pub const MAX_CYCLES: u64 = 10_000;
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline hazard handling.
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Initial data memory contents.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid JSON or names an
    /// unknown field or policy.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Enable per-stage trace events for the core.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Cycle bound for `Simulator::run`.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Stall-only or forwarding hazard resolution.
    #[serde(default)]
    pub hazard_policy: HazardPolicy,
}

/// One preloaded data memory word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryInit {
    /// Word address.
    pub address: u64,
    /// Word value.
    pub value: u64,
}

/// Data memory configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Words installed after every program load.
    #[serde(default)]
    pub initial: Vec<MemoryInit>,
}
